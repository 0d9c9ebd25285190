use anyhow::bail;
use log::{info, warn};
use rustc_hash::FxHashMap;

mod aviation;
mod datasets;
mod regional;

pub use datasets::Dataset;

/// A location of the network (airport or city) with its coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Airport {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        city: &'static str,
        country: &'static str,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            code,
            name,
            city,
            country,
            lat,
            lon,
        }
    }
}

/// Connection between two locations.
///
/// `distance` is only set when the length is known up front (road networks),
/// otherwise it is derived from the coordinates of both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub source: &'static str,
    pub target: &'static str,
    pub distance: Option<f64>,
    pub is_bidir: bool,
}

impl Route {
    pub const fn bidir(source: &'static str, target: &'static str) -> Self {
        Self {
            source,
            target,
            distance: None,
            is_bidir: true,
        }
    }

    pub const fn directed(source: &'static str, target: &'static str, distance: f64) -> Self {
        Self {
            source,
            target,
            distance: Some(distance),
            is_bidir: false,
        }
    }
}

pub struct AirNetwork {
    dataset: Dataset,
    airports: Vec<Airport>,
    index: FxHashMap<&'static str, usize>,
    routes: Vec<Route>,
}

impl AirNetwork {
    pub fn new(dataset: Dataset) -> Self {
        AirNetwork {
            dataset,
            airports: Vec::new(),
            index: FxHashMap::default(),
            routes: Vec::new(),
        }
    }

    /// Adds an airport. Returns `false` if the code is already taken.
    pub fn add_airport(&mut self, airport: Airport) -> bool {
        if self.index.contains_key(airport.code) {
            return false;
        }
        self.index.insert(airport.code, self.airports.len());
        self.airports.push(airport);
        true
    }

    /// Adds a route if both ends are known airports.
    pub fn add_route(&mut self, route: Route) -> bool {
        if !self.index.contains_key(route.source) || !self.index.contains_key(route.target) {
            return false;
        }
        self.routes.push(route);
        true
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.index.get(code).map(|idx| &self.airports[*idx])
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn get_airports(&self) -> &Vec<Airport> {
        &self.airports
    }

    pub fn get_routes(&self) -> &Vec<Route> {
        &self.routes
    }

    /// Loads one of the built-in datasets.
    ///
    /// Routes referencing unknown locations are skipped. Duplicate location
    /// codes are rejected.
    pub fn load(dataset: Dataset) -> anyhow::Result<AirNetwork> {
        let (airports, routes) = match dataset {
            Dataset::Aviation => (aviation::AIRPORTS, aviation::ROUTES),
            Dataset::Regional => (regional::CITIES, regional::ROADS),
        };

        let mut network = AirNetwork::new(dataset);

        for airport in airports {
            if !network.add_airport(*airport) {
                bail!("Duplicate location code '{}' in {}", airport.code, dataset);
            }
        }

        for route in routes {
            if !network.add_route(*route) {
                warn!(
                    "Skipping route {} -> {}: unknown location",
                    route.source, route.target
                );
            }
        }

        info!(
            "Loaded {} dataset: {} locations, {} routes",
            dataset,
            network.airports.len(),
            network.routes.len()
        );

        Ok(network)
    }
}
