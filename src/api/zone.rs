use crate::core::dimensions::{clamp_level, hex_size};
use crate::core::geometry::{HexPolygon, hex_polygon};
use crate::core::grid::location_to_grid;
use crate::util::code::{decode_code, encode_frame, encoding_frame};
use crate::util::coord::{Coordinate, LatLng, Location};
use crate::util::error::GeoHexError;
use geo_types::{Point, Polygon};
use geojson::Feature;
use serde::{Deserialize, Serialize};

/// A single hexagonal zone at one level.
///
/// # Example
///
/// ```
/// use geohex_rs::{Location, Zone};
///
/// # fn main() -> Result<(), geohex_rs::GeoHexError> {
/// let zone = Zone::from_location(&Location::new(35.780516755235475, 139.57031250000003), 9);
/// assert_eq!(zone.code, "XM566370240");
///
/// let restored = Zone::from_code(&zone.code)?;
/// assert_eq!(zone.coordinate, restored.coordinate);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Center of the hex in degrees
    pub location: Location,
    /// Lattice address of the hex at `level`
    pub coordinate: Coordinate,
    /// Textual code, `level + 2` characters
    pub code: String,
    /// Level (0-15), where higher values mean smaller hexes
    pub level: u8,
    /// Edge length in projection meters
    pub size: f64,
}

impl Zone {
    /// Zone at `level` containing the given location.
    pub fn from_location(location: &impl LatLng, level: u8) -> Self {
        let level = clamp_level(level);
        let grid = location_to_grid(location, level);
        Self::from_coordinate(&grid, level)
    }

    /// Zone at a lattice address. The address is taken as given, not adjusted,
    /// apart from rounding fractional components to the nearest lattice point.
    pub fn from_coordinate(coordinate: &Coordinate, level: u8) -> Self {
        let level = clamp_level(level);
        let frame = encoding_frame(coordinate, level);

        Self {
            location: frame.center,
            coordinate: Coordinate {
                x: coordinate.x.round(),
                y: coordinate.y.round(),
                rev: coordinate.rev,
            },
            code: encode_frame(&frame, level),
            level,
            size: hex_size(level),
        }
    }

    /// Zone identified by a code.
    ///
    /// # Example
    /// ```
    /// use geohex_rs::Zone;
    ///
    /// # fn main() -> Result<(), geohex_rs::GeoHexError> {
    /// let zone = Zone::from_code("XM566370240")?;
    /// assert_eq!(zone.level, 9);
    /// assert!((zone.lat() - 35.780443).abs() < 1e-6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, GeoHexError> {
        let (grid, level) = decode_code(code)?;
        Ok(Self::from_coordinate(&grid, level))
    }

    pub fn lat(&self) -> f64 {
        self.location.lat
    }

    pub fn lng(&self) -> f64 {
        self.location.lng
    }

    /// Center as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn center_point(&self) -> Point<f64> {
        Point::from(self.location)
    }

    pub fn hex_size(&self) -> f64 {
        hex_size(self.level)
    }

    /// The six vertices of this hex in degrees.
    pub fn polygon(&self) -> HexPolygon {
        hex_polygon(&self.location, self.hex_size())
    }

    /// Converts this zone to a closed `geo_types::Polygon`.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.polygon().to_polygon()
    }

    /// Boundary as a WKT `POLYGON`.
    pub fn to_wkt(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }

    /// Boundary as a GeoJSON feature carrying `code`, `level`, `lat` and `lng`.
    pub fn to_geojson_feature(&self) -> Feature {
        let mut properties = serde_json::Map::new();
        properties.insert("code".to_string(), self.code.clone().into());
        properties.insert("level".to_string(), self.level.into());
        properties.insert("lat".to_string(), self.lat().into());
        properties.insert("lng".to_string(), self.lng().into());

        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.to_polygon())),
            id: Some(geojson::feature::Id::String(self.code.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Zone at `level` containing `location`.
pub fn get_zone_by_location(location: &impl LatLng, level: u8) -> Zone {
    Zone::from_location(location, level)
}

/// Zone at a lattice address.
pub fn get_zone_by_coordinate(coordinate: &Coordinate, level: u8) -> Zone {
    Zone::from_coordinate(coordinate, level)
}

/// Zone identified by `code`.
pub fn get_zone_by_code(code: &str) -> Result<Zone, GeoHexError> {
    Zone::from_code(code)
}

/// Lattice address at `level` of the hex containing `location`.
pub fn get_coordinate_by_location(location: &impl LatLng, level: u8) -> Coordinate {
    location_to_grid(location, clamp_level(level))
}

/// Lattice address named by `code`.
pub fn get_coordinate_by_code(code: &str) -> Result<Coordinate, GeoHexError> {
    decode_code(code).map(|(grid, _)| grid)
}

pub fn get_hex_polygon(zone: &Zone) -> HexPolygon {
    zone.polygon()
}

pub fn get_hex_size(zone: &Zone) -> f64 {
    zone.hex_size()
}
