//! # geohex-rs
//!
//! GeoHex v3.2: a hexagonal grid over spherical Mercator, with 16 levels and
//! a short textual code per hex.
//!
//! There are currently two main entry points.
//!
//! ### 1. `Zone` - Single Zone Operations
//!
//! ```
//! use geohex_rs::{Location, Zone};
//!
//! # fn main() -> Result<(), geohex_rs::GeoHexError> {
//! let zone = Zone::from_location(&Location::new(35.780516755235475, 139.57031250000003), 9);
//! println!("{}", zone.code);
//!
//! let same = Zone::from_code("XM566370240")?;
//! assert_eq!(zone.code, same.code);
//!
//! let polygon = zone.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `ZoneSet` - Batches of Locations
//!
//! ```
//! use geohex_rs::{Location, ZoneSet};
//!
//! let set = ZoneSet::builder(9)
//!     .locations(vec![
//!         Location::new(35.647401, 139.716911),
//!         Location::new(40.7128, -74.006),
//!     ])
//!     .build();
//!
//! let geojson = geohex_rs::geojson::GeoJson::from(set.to_geojson()).to_string();
//! assert!(geojson.contains("XM488541584"));
//! ```
//!
//! The lower level steps (projection, quantization, encoding and decoding)
//! are exposed as free functions as well.

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    Zone, ZoneSet, ZoneSetBuilder, get_coordinate_by_code, get_coordinate_by_location,
    get_hex_polygon, get_hex_size, get_zone_by_code, get_zone_by_coordinate, get_zone_by_location,
};
pub use crate::core::{
    H_BASE, H_DEG, H_K, HexDims, HexPolygon, LrPair, MAX_CODE_LEN, MAX_LEVEL, MIN_LEVEL,
    adjust_coordinate, hex_polygon, hex_size, planar_hexagon,
};
pub use crate::util::{
    Coordinate, GeoHexError, LatLng, Location, calc_level_by_code, coordinate_to_location,
    decode_code, encode_code, location_to_coordinate,
};

pub use geo_types;
pub use geojson;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoHexError> {
        let location = Location::new(35.780516755235475, 139.57031250000003);

        let coordinate = get_coordinate_by_location(&location, 9);
        let zone = get_zone_by_coordinate(&coordinate, 9);
        assert_eq!(zone.code, "XM566370240");
        assert_eq!(calc_level_by_code(&zone.code), 9);

        let decoded = get_coordinate_by_code(&zone.code)?;
        assert_eq!(decoded, coordinate);

        let restored = get_zone_by_code(&zone.code)?;
        assert!((restored.lat() - 35.78044332128247).abs() < 1e-9);
        assert!((restored.lng() - 139.57018747142203).abs() < 1e-9);

        let polygon = get_hex_polygon(&restored);
        assert_eq!(polygon.to_polygon().exterior().coords().count(), 7);
        assert_eq!(get_hex_size(&restored), hex_size(9));
        Ok(())
    }

    #[test]
    fn test_projection_workflow() {
        let origin = location_to_coordinate(&Location::new(0.0, 0.0));
        assert_eq!(origin.x, 0.0);
        assert!(origin.y.abs() < 1e-6);

        let edge = location_to_coordinate(&Location::new(0.0, 180.0));
        assert_eq!(edge.x, 20037508.34);

        let back = coordinate_to_location(&edge);
        assert!((back.lng - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_adjusted_coordinate_is_stable() {
        let coordinate = get_coordinate_by_location(&Location::new(-60.0, 179.9), 0);
        let again = adjust_coordinate(&coordinate, 0);
        assert_eq!((again.x, again.y), (coordinate.x, coordinate.y));
    }

    #[test]
    fn test_every_level_has_a_code_of_matching_length() {
        let location = Location::new(-1.2921, 36.8219);
        for level in MIN_LEVEL..=MAX_LEVEL {
            let zone = get_zone_by_location(&location, level);
            assert_eq!(zone.code.len(), level as usize + 2);
            assert!(zone.code.len() <= MAX_CODE_LEN);
        }
    }
}
