use crate::api::zone::Zone;
use crate::core::dimensions::clamp_level;
use crate::util::coord::{LatLng, Location};
use geo_types::Polygon;
use geojson::FeatureCollection;
use rayon::prelude::*;
use std::collections::HashSet;

/// Zones for a batch of locations, all at one level.
///
/// # Example
///
/// ```
/// use geohex_rs::{Location, ZoneSet};
///
/// let set = ZoneSet::builder(7)
///     .location(Location::new(35.65, 139.72))
///     .location(Location::new(35.6501, 139.7201))
///     .unique(true)
///     .build();
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.codes(), vec!["XM4885426"]);
/// ```
#[derive(Debug, Clone)]
pub struct ZoneSet {
    zones: Vec<Zone>,
    level: u8,
}

impl ZoneSet {
    pub fn builder(level: u8) -> ZoneSetBuilder {
        ZoneSetBuilder::new(level)
    }

    /// One zone per location, in input order. Conversion runs in parallel.
    pub fn from_locations<L: LatLng + Sync>(locations: &[L], level: u8) -> Self {
        let level = clamp_level(level);
        let zones = locations
            .par_iter()
            .map(|location| Zone::from_location(location, level))
            .collect();
        Self { zones, level }
    }

    /// Drops repeated zones, keeping the first occurrence of each code.
    pub fn dedup(&mut self) {
        let mut seen: HashSet<String> = HashSet::with_capacity(self.zones.len());
        self.zones.retain(|zone| seen.insert(zone.code.clone()));
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.zones.iter().map(|zone| zone.code.as_str()).collect()
    }

    pub fn get(&self, code: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.code == code)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.zones
            .par_iter()
            .map(|zone| zone.to_polygon())
            .collect()
    }

    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.zones.iter().map(Zone::to_geojson_feature).collect(),
            foreign_members: None,
        }
    }
}

impl IntoIterator for ZoneSet {
    type Item = Zone;
    type IntoIter = std::vec::IntoIter<Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.into_iter()
    }
}

#[derive(Debug, Default)]
pub struct ZoneSetBuilder {
    level: u8,
    locations: Vec<Location>,
    unique: bool,
}

impl ZoneSetBuilder {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn location(mut self, location: impl LatLng) -> Self {
        self.locations.push(location.to_location());
        self
    }

    pub fn locations<L: LatLng>(mut self, locations: impl IntoIterator<Item = L>) -> Self {
        let locations = locations.into_iter().map(|l| l.to_location());
        self.locations.extend(locations);
        self
    }

    /// Keep only the first zone for each code.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn build(self) -> ZoneSet {
        let mut set = ZoneSet::from_locations(&self.locations, self.level);
        if self.unique {
            set.dedup();
        }
        set
    }
}
