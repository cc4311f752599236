pub mod zone;
pub mod zone_set;

pub use zone::{
    Zone, get_coordinate_by_code, get_coordinate_by_location, get_hex_polygon, get_hex_size,
    get_zone_by_code, get_zone_by_coordinate, get_zone_by_location,
};
pub use zone_set::{ZoneSet, ZoneSetBuilder};
