//! Parameters for network generation and algorithm comparison

use crate::constants::{Weight, LAYOVER_RATE};

/// Parameters for [`crate::comparison::run_comparison_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonParams {
    /// Currency per hour of layover, used by the cost objective
    pub(crate) layover_rate: Weight,
    /// Run the algorithms on separate threads
    pub(crate) parallel: bool,
}

impl ComparisonParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn layover_rate(mut self, rate: Weight) -> Self {
        self.layover_rate = rate;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ComparisonParams {
    fn default() -> Self {
        ComparisonParams {
            layover_rate: LAYOVER_RATE,
            parallel: false,
        }
    }
}

/// Pricing model and seed used to generate edge attributes
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkParams {
    pub(crate) seed: u64,
    /// Base fare per kilometre
    pub(crate) cost_per_km: Weight,
    /// Multiplier on the base fare
    pub(crate) demand_range: (f64, f64),
    pub(crate) fuel_surcharge_range: (Weight, Weight),
    pub(crate) airport_fee_range: (Weight, Weight),
    /// Possible layovers in hours and their probabilities
    pub(crate) layovers: Vec<(Weight, f64)>,
}

impl NetworkParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn cost_per_km(mut self, cost: Weight) -> Self {
        self.cost_per_km = cost;
        self
    }

    pub fn demand_range(mut self, low: f64, high: f64) -> Self {
        self.demand_range = (low, high);
        self
    }

    pub fn fuel_surcharge_range(mut self, low: Weight, high: Weight) -> Self {
        self.fuel_surcharge_range = (low, high);
        self
    }

    pub fn airport_fee_range(mut self, low: Weight, high: Weight) -> Self {
        self.airport_fee_range = (low, high);
        self
    }

    pub fn layovers(mut self, layovers: Vec<(Weight, f64)>) -> Self {
        self.layovers = layovers;
        self
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        NetworkParams {
            seed: 42,
            cost_per_km: 0.15,
            demand_range: (0.8, 1.6),
            fuel_surcharge_range: (80.0, 250.0),
            airport_fee_range: (50.0, 180.0),
            layovers: vec![(0.0, 0.5), (1.5, 0.3), (3.0, 0.15), (5.0, 0.05)],
        }
    }
}
