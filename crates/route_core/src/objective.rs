//! Weight functions the search algorithms optimize for.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    constants::{Weight, LAYOVER_RATE},
    graph::EdgeAttributes,
};

/// Selects which edge attribute is used as weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Objective {
    /// Raw `distance`
    Distance,
    /// Raw `time`, the layover is already part of it
    Time,
    /// `cost + layover * layover_rate`
    AdjustedCost { layover_rate: Weight },
}

impl Objective {
    /// Cost objective with the default layover penalty
    pub fn adjusted_cost() -> Self {
        Objective::AdjustedCost {
            layover_rate: LAYOVER_RATE,
        }
    }

    #[inline(always)]
    pub fn weight(&self, attrs: &EdgeAttributes) -> Weight {
        match self {
            Objective::Distance => attrs.distance,
            Objective::Time => attrs.time,
            Objective::AdjustedCost { layover_rate } => attrs.cost + attrs.layover * layover_rate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Objective::Distance => "Shortest Distance",
            Objective::Time => "Fastest Time",
            Objective::AdjustedCost { .. } => "Cheapest Cost",
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Distance
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Objective::Distance),
            "time" => Ok(Objective::Time),
            "cost" => Ok(Objective::adjusted_cost()),
            _ => Err(format!("Failed to parse objective '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn weight_selects_attribute() {
        let a = attrs!(100.0, 2.5, 80.0, 1.5);

        assert_eq!(Objective::Distance.weight(&a), 100.0);
        assert_eq!(Objective::Time.weight(&a), 2.5);
        assert_eq!(Objective::adjusted_cost().weight(&a), 80.0 + 1.5 * 50.0);
        assert_eq!(
            Objective::AdjustedCost { layover_rate: 0.0 }.weight(&a),
            80.0
        );
    }

    #[test]
    fn parse_objective() {
        assert_eq!(Ok(Objective::Time), "time".parse());
        assert_eq!(Ok(Objective::adjusted_cost()), "cost".parse());
        assert!("speed".parse::<Objective>().is_err());
    }
}
