use crate::{constants::EARTH_RADIUS_KM, graph::Location};

/// Great circle distance in kilometres using the Haversine formula
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let a = (lat2 - lat1) / 2.0;
    let b = (lon2.to_radians() - lon1.to_radians()) / 2.0;
    let c = a.sin().powi(2) + lat1.cos() * lat2.cos() * b.sin().powi(2);
    let d = 2.0 * c.sqrt().atan2((1.0 - c).sqrt());

    EARTH_RADIUS_KM * d
}

pub fn straight_line(src: &Location, dst: &Location) -> f64 {
    haversine_km(src.lat, src.lon, dst.lat, dst.lon)
}

/// Rounds to two decimal places
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn jfk_to_lhr() {
        let d = haversine_km(40.6413, -73.7781, 51.4700, -0.4543);
        assert_abs_diff_eq!(d, 5540.0, epsilon = 10.0);
    }

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn symmetric() {
        let there = haversine_km(-33.9461, 151.1772, 1.3644, 103.9915);
        let back = haversine_km(1.3644, 103.9915, -33.9461, 151.1772);
        assert_abs_diff_eq!(there, back, epsilon = 1e-9);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(2.005e3), 2005.0);
    }
}
