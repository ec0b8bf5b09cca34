//! Great-circle distance between coordinates.

use crate::Coordinate;

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between `a` and `b` in kilometres.
///
/// The result is symmetric and zero for identical inputs.
///
/// # Examples
///
/// ```
/// use campus_core::{Coordinate, distance_km};
///
/// let a = Coordinate::new(0.0, 0.0).expect("valid coordinate");
/// let b = Coordinate::new(0.0, 1.0).expect("valid coordinate");
/// assert!((distance_km(a, b) - 111.19).abs() < 0.01);
/// assert_eq!(distance_km(a, a), 0.0);
/// ```
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lng = (b.lng() - a.lng()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `h` fractionally above one for antipodal points.
    let central_angle = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(10.0, 20.0).expect("valid coordinate");
        let b = Coordinate::new(11.0, 20.0).expect("valid coordinate");
        let d = distance_km(a, b);
        assert!((d - 111.195).abs() < 0.01, "unexpected distance {d}");
    }

    #[rstest]
    fn antipodal_points_are_half_the_circumference() {
        let a = Coordinate::new(0.0, 0.0).expect("valid coordinate");
        let b = Coordinate::new(0.0, 180.0).expect("valid coordinate");
        let d = distance_km(a, b);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0e-6);
    }

    #[rstest]
    fn campus_anchors_are_roughly_25_km_apart() {
        let st_george = Coordinate::new(43.6629, -79.3957).expect("valid coordinate");
        let mississauga = Coordinate::new(43.5483, -79.6627).expect("valid coordinate");
        let d = distance_km(st_george, mississauga);
        assert!((24.0..26.0).contains(&d), "unexpected distance {d}");
    }
}
