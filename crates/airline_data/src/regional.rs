//! Road network between cities in Pakistan. Distances are road kilometres.

use crate::{Airport, Route};

pub(crate) const CITIES: &[Airport] = &[
    Airport::new("Karachi", "Karachi", "Karachi", "Pakistan", 24.8607, 67.0011),
    Airport::new("Lahore", "Lahore", "Lahore", "Pakistan", 31.5204, 74.3587),
    Airport::new("Islamabad", "Islamabad", "Islamabad", "Pakistan", 33.6844, 73.0479),
    Airport::new("Peshawar", "Peshawar", "Peshawar", "Pakistan", 34.0151, 71.5249),
    Airport::new("Quetta", "Quetta", "Quetta", "Pakistan", 30.1798, 66.9750),
    Airport::new("Multan", "Multan", "Multan", "Pakistan", 30.1575, 71.5249),
    Airport::new("Faisalabad", "Faisalabad", "Faisalabad", "Pakistan", 31.4504, 73.1350),
];

// Hyderabad is not part of the city table, the road is dropped while loading
pub(crate) const ROADS: &[Route] = &[
    Route::directed("Karachi", "Hyderabad", 150.0),
    Route::directed("Karachi", "Quetta", 680.0),
    Route::directed("Lahore", "Islamabad", 380.0),
    Route::directed("Lahore", "Faisalabad", 130.0),
    Route::directed("Lahore", "Multan", 340.0),
    Route::directed("Islamabad", "Peshawar", 170.0),
    Route::directed("Islamabad", "Lahore", 380.0),
    Route::directed("Faisalabad", "Multan", 135.0),
    Route::directed("Multan", "Quetta", 480.0),
    Route::directed("Peshawar", "Islamabad", 170.0),
    Route::directed("Quetta", "Multan", 480.0),
    Route::directed("Multan", "Lahore", 340.0),
    Route::directed("Karachi", "Multan", 900.0),
    Route::directed("Faisalabad", "Islamabad", 300.0),
    Route::directed("Karachi", "Lahore", 1200.0),
];
