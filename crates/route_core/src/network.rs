//! Builds a [`Graph`] from the static location and route tables.
//!
//! Distances come from the tables or from the coordinates. Speed, fares and
//! layovers are drawn from a caller supplied random generator, so a seeded
//! generator always produces the same network.

use airline_data::{AirNetwork, Dataset};
use anyhow::Context;
use log::{debug, info};
use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::{
    constants::Weight,
    graph::{Edge, EdgeAttributes, Graph, Location, Node, NodeIndex},
    params::NetworkParams,
    util::math::{round2, straight_line},
};

/// Draws the attributes of a single directed edge
struct AttributeSampler<'p> {
    params: &'p NetworkParams,
    speed_range: (f64, f64),
    layover_dist: WeightedIndex<f64>,
}

impl<'p> AttributeSampler<'p> {
    fn new(params: &'p NetworkParams, dataset: Dataset) -> anyhow::Result<Self> {
        let layover_dist = WeightedIndex::new(params.layovers.iter().map(|(_, p)| *p))
            .context("Invalid layover probabilities")?;
        Ok(AttributeSampler {
            params,
            speed_range: dataset.speed_range(),
            layover_dist,
        })
    }

    fn uniform<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
        if low < high {
            rng.gen_range(low..high)
        } else {
            low
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, distance: Weight) -> EdgeAttributes {
        let speed = Self::uniform(rng, self.speed_range);
        let base_cost = distance * self.params.cost_per_km;

        let demand = Self::uniform(rng, self.params.demand_range);
        let fuel_surcharge = Self::uniform(rng, self.params.fuel_surcharge_range);
        let airport_fees = Self::uniform(rng, self.params.airport_fee_range);
        let layover = self.params.layovers[self.layover_dist.sample(rng)].0;

        EdgeAttributes::new(
            round2(distance),
            round2(distance / speed + layover),
            round2(base_cost * demand + fuel_surcharge + airport_fees),
            layover,
        )
        .fuel_surcharge(round2(fuel_surcharge))
    }
}

impl Graph {
    /// Builds the graph of `network`, drawing random attributes from `rng`.
    ///
    /// Bidirectional routes get two independently drawn edges, so cost, time
    /// and layover usually differ per direction.
    pub fn from_network<R: Rng + ?Sized>(
        network: &AirNetwork,
        rng: &mut R,
        params: &NetworkParams,
    ) -> anyhow::Result<Self> {
        let sampler = AttributeSampler::new(params, network.dataset())?;

        let mut g = Graph::with_capacity(
            network.get_airports().len(),
            network.get_routes().len() * 2,
        );

        for airport in network.get_airports() {
            g.add_node(Node::with_location(
                airport.code,
                Location {
                    name: airport.name.to_string(),
                    city: airport.city.to_string(),
                    country: airport.country.to_string(),
                    lat: airport.lat,
                    lon: airport.lon,
                },
            ));
        }

        for route in network.get_routes() {
            let source = g.resolve(route.source)?;
            let target = g.resolve(route.target)?;

            let distance = match route.distance {
                Some(distance) => distance,
                None => g.distance_between(source, target).with_context(|| {
                    format!(
                        "Route {} -> {} has neither a distance nor coordinates",
                        route.source, route.target
                    )
                })?,
            };

            g.add_edge(Edge::new(source, target, sampler.sample(rng, distance)));
            if route.is_bidir {
                g.add_edge(Edge::new(target, source, sampler.sample(rng, distance)));
            }
            debug!("Added route {} -> {}", route.source, route.target);
        }

        info!(
            "Graph has {} nodes and {} edges",
            g.nodes.len(),
            g.edges.len()
        );
        Ok(g)
    }

    /// Loads a built-in dataset and generates its attributes with a
    /// generator seeded from `params`
    pub fn from_dataset(dataset: Dataset, params: &NetworkParams) -> anyhow::Result<Self> {
        let network = AirNetwork::load(dataset)
            .with_context(|| format!("Could not load dataset {}", dataset))?;
        let mut rng = StdRng::seed_from_u64(params.seed);
        Graph::from_network(&network, &mut rng, params)
    }

    /// Great circle distance between two nodes, if both have coordinates
    pub fn distance_between(&self, source: NodeIndex, target: NodeIndex) -> Option<f64> {
        let src = self.node(source)?.location.as_ref()?;
        let dst = self.node(target)?.location.as_ref()?;
        Some(straight_line(src, dst))
    }
}
