pub mod constants;
pub mod dimensions;
pub mod geometry;
pub mod grid;

pub use constants::{H_BASE, H_DEG, H_K, MAX_CODE_LEN, MAX_LEVEL, MIN_LEVEL};
pub use dimensions::{HexDims, hex_size};
pub use geometry::{HexPolygon, LrPair, hex_polygon, planar_hexagon};
pub use grid::{
    adjust_coordinate, grid_to_location, grid_to_point, location_to_grid, point_to_grid,
};
