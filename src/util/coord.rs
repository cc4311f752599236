use crate::core::constants::H_BASE;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point on the working plane, or an address on a level's hex lattice.
///
/// `rev` is set when [`adjust_coordinate`](crate::adjust_coordinate) swapped
/// the axes of a cell lying on the antimeridian. It never changes geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub rev: bool,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, rev: false }
    }
}

/// Anything that can be read as latitude/longitude degrees.
pub trait LatLng {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;

    fn to_location(&self) -> Location {
        Location::new(self.lat(), self.lng())
    }
}

impl LatLng for Location {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lng(&self) -> f64 {
        self.lng
    }
}

/// `x` is longitude, `y` is latitude.
impl LatLng for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}

impl From<Location> for Point<f64> {
    fn from(location: Location) -> Self {
        Point::new(location.lng, location.lat)
    }
}

/// Projects a location onto the spherical Mercator working plane.
///
/// Poles are outside the domain: -90 yields an infinite `y`.
pub fn location_to_coordinate<L: LatLng>(location: &L) -> Coordinate {
    let x = location.lng() * H_BASE / 180.0;
    let y = ((90.0 + location.lat()) * PI / 360.0).tan().ln() / (PI / 180.0);
    Coordinate::new(x, y * (H_BASE / 180.0))
}

/// Inverse of [`location_to_coordinate`]. The `rev` flag is ignored.
pub fn coordinate_to_location(coordinate: &Coordinate) -> Location {
    let lng = (coordinate.x / H_BASE) * 180.0;
    let lat = (coordinate.y / H_BASE) * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
    Location::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_origin() {
        let c = location_to_coordinate(&Location::new(0.0, 0.0));
        assert_eq!(c.x, 0.0);
        assert!(c.y.abs() < 1e-6);
        assert!(!c.rev);
    }

    #[test]
    fn test_antimeridian_is_half_extent() {
        let c = location_to_coordinate(&Location::new(0.0, 180.0));
        assert_eq!(c.x, H_BASE);
    }

    #[test]
    fn test_roundtrip() {
        let samples = [
            (35.647401, 139.716911),
            (-33.8688, 151.2093),
            (40.7128, -74.006),
            (84.9, -179.5),
            (-84.9, 0.25),
        ];
        for (lat, lng) in samples {
            let back = coordinate_to_location(&location_to_coordinate(&Location::new(lat, lng)));
            assert!((back.lat - lat).abs() < 1e-6, "lat {} -> {}", lat, back.lat);
            assert!((back.lng - lng).abs() < 1e-6, "lng {} -> {}", lng, back.lng);
        }
    }

    #[test]
    fn test_pole_is_not_finite() {
        let c = location_to_coordinate(&Location::new(-90.0, 0.0));
        assert!(c.y.is_infinite());
    }

    #[test]
    fn test_rev_does_not_change_geometry() {
        let plain = Coordinate::new(1_000_000.0, -250_000.0);
        let reversed = Coordinate { rev: true, ..plain };
        assert_eq!(
            coordinate_to_location(&plain),
            coordinate_to_location(&reversed)
        );
    }

    #[test]
    fn test_point_and_location_project_the_same() {
        let loc = Location::new(53.481, -2.248);
        let pt = Point::new(-2.248, 53.481);
        assert_eq!(location_to_coordinate(&loc), location_to_coordinate(&pt));
        assert_eq!(Point::from(loc), pt);
    }
}
