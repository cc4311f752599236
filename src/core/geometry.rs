use crate::util::coord::{
    Coordinate, LatLng, Location, coordinate_to_location, location_to_coordinate,
};
use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Two vertices sharing a latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LrPair {
    pub right: Location,
    pub left: Location,
}

/// The six vertices of a hex, grouped into top, middle and bottom pairs.
///
/// Tracing top-left, top-right, middle-right, bottom-right, bottom-left,
/// middle-left and back walks the boundary clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexPolygon {
    pub top: LrPair,
    pub middle: LrPair,
    pub bottom: LrPair,
}

impl HexPolygon {
    /// Vertices in boundary order, starting at top-left.
    pub fn vertices(&self) -> [Location; 6] {
        [
            self.top.left,
            self.top.right,
            self.middle.right,
            self.bottom.right,
            self.bottom.left,
            self.middle.left,
        ]
    }

    /// Closed `geo_types::Polygon` with `x` as longitude and `y` as latitude.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let mut coords: Vec<Coord<f64>> = self
            .vertices()
            .iter()
            .map(|v| Coord { x: v.lng, y: v.lat })
            .collect();
        coords.push(coords[0]);
        Polygon::new(LineString::from(coords), vec![])
    }
}

/// Vertices of the hex with edge `size` centered on `center`, in degrees.
pub fn hex_polygon<L: LatLng>(center: &L, size: f64) -> HexPolygon {
    let c = location_to_coordinate(center);
    let rise = (PI * (60.0 / 180.0)).tan() * size;

    let top = coordinate_to_location(&Coordinate::new(c.x, c.y + rise)).lat;
    let bottom = coordinate_to_location(&Coordinate::new(c.x, c.y - rise)).lat;
    let lng_at = |dx: f64| coordinate_to_location(&Coordinate::new(c.x + dx, c.y)).lng;
    let (far_left, far_right) = (lng_at(-2.0 * size), lng_at(2.0 * size));
    let (near_left, near_right) = (lng_at(-size), lng_at(size));

    HexPolygon {
        top: LrPair {
            right: Location::new(top, near_right),
            left: Location::new(top, near_left),
        },
        middle: LrPair {
            right: Location::new(center.lat(), far_right),
            left: Location::new(center.lat(), far_left),
        },
        bottom: LrPair {
            right: Location::new(bottom, near_right),
            left: Location::new(bottom, near_left),
        },
    }
}

/// The same hex on the working plane, as a closed polygon.
///
/// Vertices sit at the circumradius `2 * size`, every 60° from the +x axis.
pub fn planar_hexagon(center: &Coordinate, size: f64) -> Polygon<f64> {
    let mut coords = Vec::with_capacity(7);

    for i in 0..6 {
        let angle_rad = (i as f64 * 60.0).to_radians();
        let x = center.x + 2.0 * size * angle_rad.cos();
        let y = center.y + 2.0 * size * angle_rad.sin();
        coords.push(Coord { x, y });
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}
