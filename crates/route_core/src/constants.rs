/// Edge weight type
pub type Weight = f64;
/// Penalty in currency per hour of layover, added to the ticket cost when
/// searching for the cheapest route
pub const LAYOVER_RATE: Weight = 50.0;
/// Fuel cost in currency per kilometre travelled
pub const FUEL_COST_PER_KM: Weight = 0.12;
/// Mean earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;
