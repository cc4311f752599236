/// Error type for geohex-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoHexError {
    /// The code is malformed: bad length, unknown leader or a digit outside `0..=8`.
    InvalidCode(String),
}

impl std::fmt::Display for GeoHexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHexError::InvalidCode(msg) => write!(f, "Invalid code: {}", msg),
        }
    }
}

impl std::error::Error for GeoHexError {}
