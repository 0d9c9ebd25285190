use std::{fmt, str::FromStr};

/// Built-in networks that can be loaded without any external files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dataset {
    /// Major international airports connected by long haul routes
    #[default]
    Aviation,
    /// Road connections between cities in Pakistan
    Regional,
}

impl Dataset {
    /// Returns the range of average travel speeds in km/h.
    ///
    /// Flights use a fixed cruise speed, road segments draw a speed from the range.
    pub fn speed_range(&self) -> (f64, f64) {
        match self {
            Dataset::Aviation => (800.0, 800.0),
            Dataset::Regional => (70.0, 100.0),
        }
    }

    pub fn all() -> [Dataset; 2] {
        [Dataset::Aviation, Dataset::Regional]
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aviation" => Ok(Dataset::Aviation),
            "regional" => Ok(Dataset::Regional),
            _ => Err(format!("Failed to parse dataset '{}'", s)),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Aviation => write!(f, "aviation"),
            Dataset::Regional => write!(f, "regional"),
        }
    }
}
