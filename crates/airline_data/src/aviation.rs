//! Major international airports and the routes between them.

use crate::{Airport, Route};

pub(crate) const AIRPORTS: &[Airport] = &[
    Airport::new("JFK", "John F Kennedy Intl", "New York", "USA", 40.6413, -73.7781),
    Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "USA", 33.9416, -118.4085),
    Airport::new("ORD", "O'Hare Intl", "Chicago", "USA", 41.9742, -87.9073),
    Airport::new("DFW", "Dallas/Fort Worth Intl", "Dallas", "USA", 32.8998, -97.0403),
    Airport::new("ATL", "Hartsfield-Jackson Atlanta Intl", "Atlanta", "USA", 33.6407, -84.4277),
    Airport::new("MIA", "Miami Intl", "Miami", "USA", 25.7959, -80.2870),
    Airport::new("SFO", "San Francisco Intl", "San Francisco", "USA", 37.6213, -122.3790),
    Airport::new("SEA", "Seattle-Tacoma Intl", "Seattle", "USA", 47.4502, -122.3088),
    Airport::new("LHR", "London Heathrow", "London", "UK", 51.4700, -0.4543),
    Airport::new("CDG", "Charles de Gaulle", "Paris", "France", 49.0097, 2.5479),
    Airport::new("FRA", "Frankfurt", "Frankfurt", "Germany", 50.0379, 8.5622),
    Airport::new("AMS", "Amsterdam Schiphol", "Amsterdam", "Netherlands", 52.3105, 4.7683),
    Airport::new("MAD", "Madrid Barajas", "Madrid", "Spain", 40.4983, -3.5676),
    Airport::new("FCO", "Rome Fiumicino", "Rome", "Italy", 41.8003, 12.2389),
    Airport::new("ZRH", "Zurich", "Zurich", "Switzerland", 47.4582, 8.5492),
    Airport::new("VIE", "Vienna Intl", "Vienna", "Austria", 48.1103, 16.5697),
    Airport::new("DXB", "Dubai Intl", "Dubai", "UAE", 25.2532, 55.3657),
    Airport::new("DOH", "Hamad Intl", "Doha", "Qatar", 25.2731, 51.6080),
    Airport::new("AUH", "Abu Dhabi Intl", "Abu Dhabi", "UAE", 24.4330, 54.6511),
    Airport::new("JED", "King Abdulaziz Intl", "Jeddah", "Saudi Arabia", 21.6796, 39.1565),
    Airport::new("CAI", "Cairo Intl", "Cairo", "Egypt", 30.1219, 31.4056),
    Airport::new("IST", "Istanbul", "Istanbul", "Turkey", 41.2753, 28.7519),
    Airport::new("SIN", "Singapore Changi", "Singapore", "Singapore", 1.3644, 103.9915),
    Airport::new("HKG", "Hong Kong Intl", "Hong Kong", "Hong Kong", 22.3080, 113.9185),
    Airport::new("NRT", "Tokyo Narita", "Tokyo", "Japan", 35.7720, 140.3929),
    Airport::new("ICN", "Incheon Intl", "Seoul", "South Korea", 37.4602, 126.4407),
    Airport::new("PVG", "Shanghai Pudong", "Shanghai", "China", 31.1443, 121.8083),
    Airport::new("PEK", "Beijing Capital", "Beijing", "China", 40.0799, 116.6031),
    Airport::new("BKK", "Bangkok Suvarnabhumi", "Bangkok", "Thailand", 13.6900, 100.7501),
    Airport::new("KUL", "Kuala Lumpur Intl", "Kuala Lumpur", "Malaysia", 2.7456, 101.7099),
    Airport::new("DEL", "Indira Gandhi Intl", "Delhi", "India", 28.5562, 77.1000),
    Airport::new("BOM", "Chhatrapati Shivaji", "Mumbai", "India", 19.0895, 72.8656),
    Airport::new("BLR", "Kempegowda Intl", "Bangalore", "India", 13.1979, 77.7063),
    Airport::new("KHI", "Jinnah Intl", "Karachi", "Pakistan", 24.9056, 67.1608),
    Airport::new("LHE", "Allama Iqbal Intl", "Lahore", "Pakistan", 31.5214, 74.4036),
    Airport::new("ISB", "Islamabad Intl", "Islamabad", "Pakistan", 33.6169, 73.0992),
    Airport::new("SYD", "Sydney Kingsford Smith", "Sydney", "Australia", -33.9461, 151.1772),
    Airport::new("MEL", "Melbourne", "Melbourne", "Australia", -37.6690, 144.8410),
    Airport::new("AKL", "Auckland", "Auckland", "New Zealand", -37.0082, 174.7850),
    Airport::new("YYZ", "Toronto Pearson", "Toronto", "Canada", 43.6777, -79.6248),
    Airport::new("YVR", "Vancouver Intl", "Vancouver", "Canada", 49.1967, -123.1815),
    Airport::new("GRU", "São Paulo–Guarulhos", "São Paulo", "Brazil", -23.4356, -46.4731),
    Airport::new("EZE", "Ministro Pistarini", "Buenos Aires", "Argentina", -34.8222, -58.5358),
    Airport::new("SCL", "Santiago Intl", "Santiago", "Chile", -33.3930, -70.7859),
    Airport::new("BOG", "El Dorado Intl", "Bogotá", "Colombia", 4.7016, -74.1469),
    Airport::new("JNB", "OR Tambo Intl", "Johannesburg", "South Africa", -26.1392, 28.2460),
    Airport::new("CPT", "Cape Town Intl", "Cape Town", "South Africa", -33.9715, 18.6021),
    Airport::new("ADD", "Addis Ababa Bole", "Addis Ababa", "Ethiopia", 8.9779, 38.7997),
];

pub(crate) const ROUTES: &[Route] = &[
    // Trans-Atlantic
    Route::bidir("JFK", "LHR"),
    Route::bidir("JFK", "CDG"),
    Route::bidir("JFK", "FRA"),
    Route::bidir("JFK", "AMS"),
    Route::bidir("JFK", "MAD"),
    Route::bidir("LAX", "LHR"),
    Route::bidir("ORD", "LHR"),
    Route::bidir("ORD", "FRA"),
    Route::bidir("ATL", "LHR"),
    Route::bidir("ATL", "CDG"),
    Route::bidir("MIA", "MAD"),
    Route::bidir("SFO", "LHR"),
    Route::bidir("SFO", "FRA"),
    // Trans-Pacific
    Route::bidir("LAX", "NRT"),
    Route::bidir("LAX", "ICN"),
    Route::bidir("LAX", "HKG"),
    Route::bidir("LAX", "SYD"),
    Route::bidir("SFO", "NRT"),
    Route::bidir("SFO", "SIN"),
    Route::bidir("SFO", "HKG"),
    Route::bidir("SEA", "NRT"),
    Route::bidir("ORD", "NRT"),
    Route::bidir("DFW", "ICN"),
    // Europe
    Route::bidir("LHR", "CDG"),
    Route::bidir("LHR", "FRA"),
    Route::bidir("LHR", "AMS"),
    Route::bidir("LHR", "MAD"),
    Route::bidir("LHR", "FCO"),
    Route::bidir("CDG", "FRA"),
    Route::bidir("CDG", "AMS"),
    Route::bidir("FRA", "ZRH"),
    Route::bidir("FRA", "VIE"),
    // Middle East hubs
    Route::bidir("LHR", "DXB"),
    Route::bidir("CDG", "DXB"),
    Route::bidir("FRA", "DXB"),
    Route::bidir("DXB", "DOH"),
    Route::bidir("DXB", "AUH"),
    Route::bidir("DXB", "JED"),
    Route::bidir("DXB", "CAI"),
    Route::bidir("IST", "DXB"),
    Route::bidir("IST", "DOH"),
    // Middle East to Asia
    Route::bidir("DXB", "SIN"),
    Route::bidir("DXB", "HKG"),
    Route::bidir("DXB", "BKK"),
    Route::bidir("DXB", "KUL"),
    Route::bidir("DXB", "DEL"),
    Route::bidir("DXB", "BOM"),
    Route::bidir("DOH", "SIN"),
    Route::bidir("DOH", "HKG"),
    // Asia
    Route::bidir("SIN", "HKG"),
    Route::bidir("SIN", "BKK"),
    Route::bidir("SIN", "KUL"),
    Route::bidir("HKG", "NRT"),
    Route::bidir("HKG", "ICN"),
    Route::bidir("HKG", "PVG"),
    Route::bidir("HKG", "PEK"),
    Route::bidir("NRT", "ICN"),
    Route::bidir("BKK", "SIN"),
    Route::bidir("KUL", "BKK"),
    // South Asia
    Route::bidir("DEL", "BOM"),
    Route::bidir("DEL", "BLR"),
    Route::bidir("DEL", "DXB"),
    Route::bidir("BOM", "SIN"),
    Route::bidir("DEL", "KHI"),
    Route::bidir("DEL", "LHE"),
    Route::bidir("KHI", "DXB"),
    Route::bidir("LHE", "DXB"),
    Route::bidir("KHI", "ISB"),
    Route::bidir("ISB", "DXB"),
    Route::bidir("ISB", "LHR"),
    // Oceania
    Route::bidir("SYD", "SIN"),
    Route::bidir("SYD", "HKG"),
    Route::bidir("SYD", "AKL"),
    Route::bidir("MEL", "SIN"),
    Route::bidir("SYD", "LAX"),
    Route::bidir("AKL", "LAX"),
    // North America
    Route::bidir("JFK", "LAX"),
    Route::bidir("JFK", "ORD"),
    Route::bidir("JFK", "MIA"),
    Route::bidir("LAX", "SFO"),
    Route::bidir("ORD", "DFW"),
    Route::bidir("ATL", "MIA"),
    Route::bidir("YYZ", "JFK"),
    Route::bidir("YVR", "LAX"),
    // South America
    Route::bidir("MIA", "GRU"),
    Route::bidir("MIA", "BOG"),
    Route::bidir("ATL", "GRU"),
    Route::bidir("JFK", "GRU"),
    Route::bidir("GRU", "EZE"),
    Route::bidir("GRU", "SCL"),
    Route::bidir("EZE", "SCL"),
    Route::bidir("BOG", "GRU"),
    // Africa
    Route::bidir("LHR", "JNB"),
    Route::bidir("CDG", "JNB"),
    Route::bidir("DXB", "JNB"),
    Route::bidir("JNB", "CPT"),
    Route::bidir("CAI", "JNB"),
    Route::bidir("ADD", "DXB"),
    Route::bidir("ADD", "CAI"),
    // Europe to Middle East
    Route::bidir("LHR", "IST"),
    Route::bidir("CDG", "IST"),
    Route::bidir("FRA", "IST"),
    Route::bidir("IST", "CAI"),
];
