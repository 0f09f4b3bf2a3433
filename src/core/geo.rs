use crate::domain::model::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given in degrees.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

pub fn great_circle_distance(from: Coordinates, to: Coordinates) -> f64 {
    haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_circumference_on_equator() {
        let d = haversine_distance(0.0, 0.0, 0.0, 90.0);
        assert_relative_eq!(d, std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM, epsilon = 1e-6);
        assert!((d - 10007.5).abs() < 0.1);
    }

    #[test]
    fn test_same_point_is_zero() {
        for (lat, lon) in [(0.0, 0.0), (40.4168, -3.7038), (-90.0, 180.0), (66.5, 25.7)] {
            assert_eq!(haversine_distance(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ((40.4168, -3.7038), (35.6762, 139.6503)),
            // across the antimeridian
            ((-17.7134, 178.065), (-13.7590, -172.1046)),
            ((65.0, 179.9), (65.0, -179.9)),
            // through and onto the poles
            ((89.5, 0.0), (89.5, 180.0)),
            ((90.0, 0.0), (-33.8688, 151.2093)),
            ((-90.0, 45.0), (-60.0, -120.0)),
            ((0.0, -180.0), (0.0, 180.0)),
        ];

        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let a = Coordinates::new(lat1, lon1);
            let b = Coordinates::new(lat2, lon2);
            let there = great_circle_distance(a, b);
            let back = great_circle_distance(b, a);
            assert!(there >= 0.0);
            assert_relative_eq!(there, back, max_relative = 1e-9, epsilon = 1e-9);
        }

        let madrid_tokyo = haversine_distance(40.4168, -3.7038, 35.6762, 139.6503);
        assert!(madrid_tokyo > 10_000.0 && madrid_tokyo < 11_000.0);
        // 0.2 degrees of longitude at 65N, not most of the way round
        assert!(haversine_distance(65.0, 179.9, 65.0, -179.9) < 10.0);
    }

    #[test]
    fn test_antipodes() {
        let d = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }
}
