pub mod code;
pub mod coord;
pub mod error;

pub use code::{calc_level_by_code, decode_code, encode_code};
pub use coord::{Coordinate, LatLng, Location, coordinate_to_location, location_to_coordinate};
pub use error::GeoHexError;
