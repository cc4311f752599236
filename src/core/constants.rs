use std::f64::consts::PI;

/// Half-extent of the projection plane in meters (half the equatorial circumference)
pub const H_BASE: f64 = 20037508.34;

/// Tilt of the hex lattice against the projection axes (30 degrees)
pub const H_DEG: f64 = PI * (30.0 / 180.0);

/// Shear factor between the two lattice axes, `tan(30°)`
pub const H_K: f64 = 0.5773502691896257;

/// Coarsest level
pub const MIN_LEVEL: u8 = 0;

/// Finest level
pub const MAX_LEVEL: u8 = 15;

/// Longest possible code (a two character leader plus one digit per level)
pub const MAX_CODE_LEN: usize = MAX_LEVEL as usize + 2;

/// Characters a code leader is drawn from.
///
/// A leader stores the three leading base-9 digits `d0 d1 d2` read as the
/// decimal number `n`, written as `KEY[n / 30]` followed by `KEY[n % 30]`.
pub(crate) const LEADER_KEY: &[u8; 30] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcd";
