use crate::core::constants::{H_BASE, H_K, MAX_LEVEL};

/// Lattice measurements for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexDims {
    pub level: u8,
    /// Edge length in projection meters
    pub size: f64,
    /// Circumradius, `2 * size` on the working plane
    pub r_circum: f64,
    /// Lattice step along the first axis
    pub unit_x: f64,
    /// Lattice step along the second axis
    pub unit_y: f64,
    /// Grid distance `|X - Y|` at which a cell lies on the antimeridian
    pub max_steps: f64,
}

impl HexDims {
    /// Dimensions for `level`, clamped to [`MAX_LEVEL`].
    pub fn for_level(level: u8) -> Self {
        let level = clamp_level(level);
        let size = hex_size(level);
        Self {
            level,
            size,
            r_circum: 2.0 * size,
            unit_x: 6.0 * size,
            unit_y: 6.0 * size * H_K,
            max_steps: pow3(level as u32 + 2),
        }
    }
}

/// Edge length of a hex at `level`, `H_BASE / 3^(level + 3)`.
pub fn hex_size(level: u8) -> f64 {
    H_BASE / pow3(clamp_level(level) as u32 + 3)
}

pub(crate) fn clamp_level(level: u8) -> u8 {
    level.min(MAX_LEVEL)
}

pub(crate) fn pow3(exp: u32) -> f64 {
    3u64.pow(exp) as f64
}
