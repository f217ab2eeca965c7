#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Single-pass classification of a world document into display-ready
//! overlay collections.
//!
//! The classifier walks the region and map hierarchy in document order,
//! flattens tasks, skill challenges, and sectors into running collections,
//! partitions the mixed point of interest records into their typed layers,
//! and admits name labels for significant maps. After the walk, every
//! accumulated coordinate is projected through the [`Projection`] port at
//! the viewport's maximum zoom. The finished [`Overlay`] is returned as a
//! whole; no partially classified state is ever observable.

use overworld_core::{
    DisplayCoord, LandmarkMarker, MapLabel, Overlay, Projection, RawCoord, RegionId,
    SectorOverlay, SkillPointMarker, TaskMarker, VistaMarker, WaypointMarker,
};
use overworld_document::{PoiRecord, WorldDocument};
use tracing::debug;

/// Region id the upstream API ships broken coordinates for.
const BROKEN_COORDINATES_REGION: &str = "12";

/// Maps with no tasks and at most this many points of interest are treated
/// as story instances and receive no name label.
const LABEL_POI_THRESHOLD: usize = 5;

/// Configuration parameters for a classification pass.
#[derive(Clone, Debug)]
pub struct Config {
    excluded_regions: Vec<RegionId>,
}

impl Config {
    /// Creates a configuration excluding the given region ids.
    #[must_use]
    pub fn new(excluded_regions: Vec<RegionId>) -> Self {
        Self { excluded_regions }
    }

    /// Region ids excluded from classification.
    #[must_use]
    pub fn excluded_regions(&self) -> &[RegionId] {
        &self.excluded_regions
    }

    fn is_excluded(&self, region: &RegionId) -> bool {
        self.excluded_regions.contains(region)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(vec![RegionId::new(BROKEN_COORDINATES_REGION)])
    }
}

/// Pure transform that turns one world document into one [`Overlay`].
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    config: Config,
}

impl Classifier {
    /// Creates a classifier using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Classifies the document against the given viewport.
    ///
    /// The walk is a single pass in document order with no backtracking.
    /// The viewport is only consulted through [`Projection::to_display`],
    /// so the zoom level is always the viewport's own maximum.
    pub fn classify<P: Projection>(&self, document: &WorldDocument, viewport: &P) -> Overlay {
        let mut draft = Draft::default();

        for (region_id, region) in document.regions() {
            if self.config.is_excluded(region_id) {
                debug!(region = region_id.as_str(), "skipping excluded region");
                continue;
            }

            for (_, map) in region.maps() {
                if let Some(label_coord) = map.label_coord() {
                    if !map.tasks().is_empty()
                        || map.points_of_interest().len() > LABEL_POI_THRESHOLD
                    {
                        draft.map_labels.push((map.name(), label_coord));
                    }
                }

                for task in map.tasks() {
                    draft.tasks.push((task.objective(), task.coord()));
                }
                for challenge in map.skill_challenges() {
                    draft.skill_points.push(challenge.coord());
                }

                for sector in map.sectors() {
                    draft
                        .sectors
                        .push((sector.name(), sector.bounds(), map.name(), region.name()));
                }

                for record in map.points_of_interest() {
                    match record {
                        PoiRecord::Waypoint { name, coord } => {
                            draft.waypoints.push((name.as_str(), *coord));
                        }
                        PoiRecord::Vista { coord } => draft.vistas.push(*coord),
                        PoiRecord::Landmark { name, coord } => {
                            draft.landmarks.push((name.as_str(), *coord));
                        }
                        PoiRecord::Unrecognized => draft.dropped_records += 1,
                    }
                }
            }
        }

        if draft.dropped_records > 0 {
            debug!(
                dropped = draft.dropped_records,
                "dropped point of interest records with unrecognized types"
            );
        }

        draft.into_overlay(viewport)
    }
}

/// Accumulated raw collections of one walk, pending projection.
#[derive(Default)]
struct Draft<'doc> {
    tasks: Vec<(&'doc str, RawCoord)>,
    skill_points: Vec<RawCoord>,
    waypoints: Vec<(&'doc str, RawCoord)>,
    vistas: Vec<RawCoord>,
    landmarks: Vec<(&'doc str, RawCoord)>,
    map_labels: Vec<(&'doc str, RawCoord)>,
    sectors: Vec<(&'doc str, &'doc [RawCoord], &'doc str, &'doc str)>,
    dropped_records: usize,
}

impl Draft<'_> {
    /// Projects every accumulated coordinate and assembles the overlay.
    fn into_overlay<P: Projection>(self, viewport: &P) -> Overlay {
        let project = |coord: RawCoord| -> DisplayCoord { viewport.to_display(coord) };

        Overlay::new(
            self.tasks
                .into_iter()
                .map(|(objective, coord)| TaskMarker::new(objective, project(coord)))
                .collect(),
            self.skill_points
                .into_iter()
                .map(|coord| SkillPointMarker::new(project(coord)))
                .collect(),
            self.waypoints
                .into_iter()
                .map(|(name, coord)| WaypointMarker::new(name, project(coord)))
                .collect(),
            self.vistas
                .into_iter()
                .map(|coord| VistaMarker::new(project(coord)))
                .collect(),
            self.landmarks
                .into_iter()
                .map(|(name, coord)| LandmarkMarker::new(name, project(coord)))
                .collect(),
            self.map_labels
                .into_iter()
                .map(|(name, coord)| MapLabel::new(name, project(coord)))
                .collect(),
            self.sectors
                .into_iter()
                .map(|(name, bounds, parent_map, parent_region)| {
                    let bounds = bounds.iter().copied().map(project).collect();
                    SectorOverlay::new(name, bounds, parent_map, parent_region)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, BROKEN_COORDINATES_REGION};
    use overworld_core::RegionId;

    #[test]
    fn default_config_excludes_the_broken_region() {
        let config = Config::default();
        assert_eq!(
            config.excluded_regions(),
            [RegionId::new(BROKEN_COORDINATES_REGION)],
        );
    }

    #[test]
    fn explicit_config_replaces_the_default_exclusion() {
        let config = Config::new(vec![RegionId::new("7")]);
        assert!(!config.is_excluded(&RegionId::new(BROKEN_COORDINATES_REGION)));
        assert!(config.is_excluded(&RegionId::new("7")));
    }
}
