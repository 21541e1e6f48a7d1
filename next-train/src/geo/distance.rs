//! Great-circle distance.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between two points, in kilometres.
///
/// NaN in either input gives NaN.
///
/// # Examples
///
/// ```
/// use next_train::domain::Coordinate;
/// use next_train::geo::haversine_km;
///
/// let sydney = Coordinate::new(-33.8688, 151.2093);
/// let melbourne = Coordinate::new(-37.8136, 144.9631);
/// let d = haversine_km(sydney, melbourne);
/// assert!((d - 713.43).abs() < 0.01);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points. Plain
    // comparison so that NaN passes through.
    let a = if a > 1.0 { 1.0 } else { a };

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        /// Distance never goes negative
        #[test]
        fn non_negative(a in coordinate(), b in coordinate()) {
            prop_assert!(haversine_km(a, b) >= 0.0);
        }

        /// Distance is the same in both directions
        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        /// A point is zero kilometres from itself
        #[test]
        fn identity(a in coordinate()) {
            prop_assert_eq!(haversine_km(a, a), 0.0);
        }

        /// Nothing on Earth is further than the antipode
        #[test]
        fn bounded_by_half_circumference(a in coordinate(), b in coordinate()) {
            prop_assert!(haversine_km(a, b) <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }
    }
}
