#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Typed model of the raw world document.
//!
//! The upstream API delivers one nested JSON document describing regions,
//! map areas, and their contents. This crate decodes that document once
//! into a faithful typed model, preserving document order and the quirks
//! the classifier depends on. Notably, the upstream stores waypoints,
//! vistas, and landmarks in a single `points_of_interest` array whose sole
//! discriminant is a `type` string; [`PoiRecord`] resolves that tag at
//! ingestion so no later stage re-filters by string comparison.
//!
//! Decoding is the fail-fast boundary: a document without a `regions` key,
//! or with a non-array where an array is expected, is a data contract
//! violation and surfaces as a [`DocumentError`]. Missing per-map
//! collections are not violations and decode as empty.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use overworld_core::{MapId, RawCoord, RegionId};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Failures raised while loading a world document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("failed to read world document at {path}")]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or violates the expected structure.
    #[error("world document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root of the raw world description.
#[derive(Debug, Deserialize)]
pub struct WorldDocument {
    regions: IndexMap<RegionId, Region>,
}

impl WorldDocument {
    /// Decodes a world document from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json)?;
        debug!(regions = document.regions.len(), "decoded world document");
        Ok(document)
    }

    /// Reads and decodes a world document from a file.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Regions in document order, keyed by region id.
    pub fn regions(&self) -> impl Iterator<Item = (&RegionId, &Region)> {
        self.regions.iter()
    }
}

/// Top-level geographic grouping of map areas.
#[derive(Debug, Deserialize)]
pub struct Region {
    name: String,
    maps: IndexMap<MapId, MapArea>,
}

impl Region {
    /// Name of the region.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map areas in document order, keyed by map id.
    pub fn maps(&self) -> impl Iterator<Item = (&MapId, &MapArea)> {
        self.maps.iter()
    }
}

/// Named sub-area of a region, the unit carrying tasks, POIs, and sectors.
#[derive(Debug, Deserialize)]
pub struct MapArea {
    name: String,
    #[serde(default)]
    label_coord: Option<RawCoord>,
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    skill_challenges: Vec<SkillChallenge>,
    #[serde(default)]
    points_of_interest: Vec<PoiRecord>,
    #[serde(default)]
    sectors: Vec<Sector>,
}

impl MapArea {
    /// Name of the map area.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Anchor position for the map's name label, when the map has one.
    #[must_use]
    pub const fn label_coord(&self) -> Option<RawCoord> {
        self.label_coord
    }

    /// Renown tasks located in the map area.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Skill challenges located in the map area.
    #[must_use]
    pub fn skill_challenges(&self) -> &[SkillChallenge] {
        &self.skill_challenges
    }

    /// The mixed-type point of interest records of the map area.
    #[must_use]
    pub fn points_of_interest(&self) -> &[PoiRecord] {
        &self.points_of_interest
    }

    /// Polygonal sectors subdividing the map area.
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }
}

/// Renown task with its objective text.
#[derive(Debug, Deserialize)]
pub struct Task {
    objective: String,
    coord: RawCoord,
}

impl Task {
    /// Objective text of the task.
    #[must_use]
    pub fn objective(&self) -> &str {
        &self.objective
    }

    /// Raw position of the task.
    #[must_use]
    pub const fn coord(&self) -> RawCoord {
        self.coord
    }
}

/// Skill challenge; carries no display text of its own.
#[derive(Debug, Deserialize)]
pub struct SkillChallenge {
    coord: RawCoord,
}

impl SkillChallenge {
    /// Raw position of the skill challenge.
    #[must_use]
    pub const fn coord(&self) -> RawCoord {
        self.coord
    }
}

/// One record of the upstream `points_of_interest` array, resolved by its
/// `type` tag at decode time.
///
/// Records whose tag is outside the recognized set decode as
/// [`PoiRecord::Unrecognized`] and are silently dropped by the classifier.
/// That is documented upstream behavior, not an error.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PoiRecord {
    /// Travel waypoint with a display name.
    Waypoint {
        /// Waypoint name.
        name: String,
        /// Raw position of the waypoint.
        coord: RawCoord,
    },
    /// Vista; upstream ships these without a usable name.
    Vista {
        /// Raw position of the vista.
        coord: RawCoord,
    },
    /// Landmark point of interest with a display name.
    Landmark {
        /// Landmark name.
        name: String,
        /// Raw position of the landmark.
        coord: RawCoord,
    },
    /// Any record whose `type` tag is outside the recognized set.
    #[serde(other)]
    Unrecognized,
}

/// Named polygonal sub-region of a map area.
#[derive(Debug, Deserialize)]
pub struct Sector {
    name: String,
    #[serde(default)]
    bounds: Vec<RawCoord>,
}

impl Sector {
    /// Name of the sector.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw polygon vertices of the sector boundary.
    #[must_use]
    pub fn bounds(&self) -> &[RawCoord] {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::{PoiRecord, WorldDocument};
    use overworld_core::RawCoord;

    #[test]
    fn map_area_collections_default_to_empty() {
        let document = WorldDocument::from_json_str(
            r#"{"regions": {"1": {"name": "Shiverpeaks", "maps": {"26": {"name": "Dredgehaunt Cliffs"}}}}}"#,
        )
        .expect("decode");

        let (_, region) = document.regions().next().expect("one region");
        let (_, map) = region.maps().next().expect("one map");
        assert!(map.label_coord().is_none());
        assert!(map.tasks().is_empty());
        assert!(map.skill_challenges().is_empty());
        assert!(map.points_of_interest().is_empty());
        assert!(map.sectors().is_empty());
    }

    #[test]
    fn document_without_regions_fails_fast() {
        let result = WorldDocument::from_json_str(r#"{"texture_dims": [32768, 32768]}"#);
        assert!(result.is_err(), "missing regions key must be an error");
    }

    #[test]
    fn poi_tag_resolves_each_recognized_kind() {
        let document = WorldDocument::from_json_str(
            r#"{"regions": {"1": {"name": "Kryta", "maps": {"15": {
                "name": "Queensdale",
                "points_of_interest": [
                    {"type": "waypoint", "name": "Beetletun Waypoint", "coord": [11000, 13000]},
                    {"type": "vista", "coord": [11200, 13100]},
                    {"type": "landmark", "name": "The Great Hall", "coord": [11400, 13200]},
                    {"type": "unlock", "name": "Some Dungeon", "coord": [11600, 13300]}
                ]
            }}}}}"#,
        )
        .expect("decode");

        let (_, region) = document.regions().next().expect("one region");
        let (_, map) = region.maps().next().expect("one map");
        let records = map.points_of_interest();
        assert_eq!(records.len(), 4);
        assert!(matches!(records[0], PoiRecord::Waypoint { .. }));
        assert!(matches!(records[1], PoiRecord::Vista { .. }));
        assert!(matches!(records[2], PoiRecord::Landmark { .. }));
        assert!(matches!(records[3], PoiRecord::Unrecognized));
    }

    #[test]
    fn regions_preserve_document_order() {
        let document = WorldDocument::from_json_str(
            r#"{"regions": {
                "4": {"name": "Ascalon", "maps": {}},
                "1": {"name": "Shiverpeaks", "maps": {}},
                "2": {"name": "Kryta", "maps": {}}
            }}"#,
        )
        .expect("decode");

        let names: Vec<&str> = document.regions().map(|(_, region)| region.name()).collect();
        assert_eq!(names, ["Ascalon", "Shiverpeaks", "Kryta"]);
    }

    #[test]
    fn coordinates_decode_from_pairs() {
        let document = WorldDocument::from_json_str(
            r#"{"regions": {"1": {"name": "Kryta", "maps": {"15": {
                "name": "Queensdale",
                "label_coord": [10752, 14592],
                "tasks": [{"objective": "Help the farmers", "coord": [10500, 14400]}]
            }}}}}"#,
        )
        .expect("decode");

        let (_, region) = document.regions().next().expect("one region");
        let (_, map) = region.maps().next().expect("one map");
        assert_eq!(map.label_coord(), Some(RawCoord::new(10752.0, 14592.0)));
        assert_eq!(map.tasks()[0].coord(), RawCoord::new(10500.0, 14400.0));
    }
}
