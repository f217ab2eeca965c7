#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Overworld atlas pipeline.
//!
//! This crate defines the vocabulary that connects the document model, the
//! classifier system, and the viewport adapters. The document crate decodes
//! the raw world description into types built from the coordinate and
//! identifier primitives defined here, the classifier consumes that model
//! and emits the display-ready [`Overlay`], and viewport adapters implement
//! the [`Projection`] port that converts raw game-world pixels into the
//! display coordinate space. Renderers only ever observe [`DisplayCoord`]
//! values; a raw coordinate cannot leak past classification.

use serde::{Deserialize, Serialize};

/// Position in raw game-world pixel space.
///
/// The source tileset is fixed-resolution with the y axis pointing down.
/// Serialized as a two-element `[x, y]` array, matching the upstream JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct RawCoord {
    x: f64,
    y: f64,
}

impl RawCoord {
    /// Creates a new raw coordinate from pixel components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal pixel component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical pixel component, increasing downward.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

impl From<[f64; 2]> for RawCoord {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<RawCoord> for [f64; 2] {
    fn from(coord: RawCoord) -> Self {
        [coord.x, coord.y]
    }
}

/// Position in the display coordinate space of the tile viewport.
///
/// Produced exclusively by a [`Projection`] implementation. Serialized as a
/// two-element `[lat, lng]` array, the shape marker layers consume.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct DisplayCoord {
    lat: f64,
    lng: f64,
}

impl DisplayCoord {
    /// Creates a new display coordinate from latitude and longitude parts.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude-shaped component.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude-shaped component.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<[f64; 2]> for DisplayCoord {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<DisplayCoord> for [f64; 2] {
    fn from(coord: DisplayCoord) -> Self {
        [coord.lat, coord.lng]
    }
}

/// Discrete zoom level of a tile viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Creates a new zoom level wrapper.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the underlying zoom value.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

/// Identifier that keys a region within the world document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Creates a new region identifier from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// String form of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier that keys a map area within a region.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapId(String);

impl MapId {
    /// Creates a new map identifier from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// String form of the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Port through which raw game-world coordinates reach display space.
///
/// The viewport's unprojection formula is a black box to the classifier;
/// swapping the underlying mapping library means swapping the implementor
/// of this trait and nothing else. Implementations must be pure: the same
/// coordinate and zoom always produce the same display coordinate.
pub trait Projection {
    /// Maximum zoom level the viewport is configured for.
    fn max_zoom(&self) -> ZoomLevel;

    /// Converts one raw coordinate into display space at the given zoom.
    fn unproject(&self, coord: RawCoord, zoom: ZoomLevel) -> DisplayCoord;

    /// Converts one raw coordinate at the viewport's own maximum zoom.
    ///
    /// Classification always goes through this method so the zoom level is
    /// queried from the viewport rather than chosen by the caller.
    fn to_display(&self, coord: RawCoord) -> DisplayCoord {
        self.unproject(coord, self.max_zoom())
    }
}

/// Display-ready marker for a renown task.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskMarker {
    objective: String,
    coord: DisplayCoord,
}

impl TaskMarker {
    /// Creates a new task marker.
    #[must_use]
    pub fn new(objective: impl Into<String>, coord: DisplayCoord) -> Self {
        Self {
            objective: objective.into(),
            coord,
        }
    }

    /// Objective text shown in the marker tooltip.
    #[must_use]
    pub fn objective(&self) -> &str {
        &self.objective
    }

    /// Display position of the marker.
    #[must_use]
    pub const fn coord(&self) -> DisplayCoord {
        self.coord
    }
}

/// Display-ready marker for a skill challenge.
///
/// Skill points carry no text of their own; renderers label them with a
/// constant caption.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SkillPointMarker {
    coord: DisplayCoord,
}

impl SkillPointMarker {
    /// Creates a new skill point marker.
    #[must_use]
    pub const fn new(coord: DisplayCoord) -> Self {
        Self { coord }
    }

    /// Display position of the marker.
    #[must_use]
    pub const fn coord(&self) -> DisplayCoord {
        self.coord
    }
}

/// Display-ready marker for a waypoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaypointMarker {
    name: String,
    coord: DisplayCoord,
}

impl WaypointMarker {
    /// Creates a new waypoint marker.
    #[must_use]
    pub fn new(name: impl Into<String>, coord: DisplayCoord) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }

    /// Waypoint name shown in the marker tooltip.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display position of the marker.
    #[must_use]
    pub const fn coord(&self) -> DisplayCoord {
        self.coord
    }
}

/// Display-ready marker for a vista.
///
/// Vistas arrive unnamed upstream; renderers caption them with a constant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VistaMarker {
    coord: DisplayCoord,
}

impl VistaMarker {
    /// Creates a new vista marker.
    #[must_use]
    pub const fn new(coord: DisplayCoord) -> Self {
        Self { coord }
    }

    /// Display position of the marker.
    #[must_use]
    pub const fn coord(&self) -> DisplayCoord {
        self.coord
    }
}

/// Display-ready marker for a landmark point of interest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LandmarkMarker {
    name: String,
    coord: DisplayCoord,
}

impl LandmarkMarker {
    /// Creates a new landmark marker.
    #[must_use]
    pub fn new(name: impl Into<String>, coord: DisplayCoord) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }

    /// Landmark name shown in the marker tooltip.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display position of the marker.
    #[must_use]
    pub const fn coord(&self) -> DisplayCoord {
        self.coord
    }
}

/// Label naming a map area, shown only for significant maps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapLabel {
    name: String,
    coord: DisplayCoord,
}

impl MapLabel {
    /// Creates a new map label.
    #[must_use]
    pub fn new(name: impl Into<String>, coord: DisplayCoord) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }

    /// Name of the labelled map area.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display position the label is anchored at.
    #[must_use]
    pub const fn coord(&self) -> DisplayCoord {
        self.coord
    }
}

/// Display-ready polygonal sector with navigation provenance.
///
/// Provenance is stamped exactly once, at classification time, and feeds
/// the breadcrumb trail an external UI renders when the sector is selected.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectorOverlay {
    name: String,
    bounds: Vec<DisplayCoord>,
    parent_map: String,
    parent_region: String,
}

impl SectorOverlay {
    /// Creates a new sector overlay with its provenance stamp.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        bounds: Vec<DisplayCoord>,
        parent_map: impl Into<String>,
        parent_region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bounds,
            parent_map: parent_map.into(),
            parent_region: parent_region.into(),
        }
    }

    /// Name of the sector.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Polygon vertices in display space.
    #[must_use]
    pub fn bounds(&self) -> &[DisplayCoord] {
        &self.bounds
    }

    /// Name of the map area that contains the sector.
    #[must_use]
    pub fn parent_map(&self) -> &str {
        &self.parent_map
    }

    /// Name of the region that contains the sector's map area.
    #[must_use]
    pub fn parent_region(&self) -> &str {
        &self.parent_region
    }

    /// Breadcrumb trail text for the selected sector.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        format!(
            "{} \u{25b6} {} \u{25b6} {}",
            self.parent_region, self.parent_map, self.name
        )
    }
}

/// The seven display-ready collections produced by one classification pass.
///
/// An overlay is returned whole; callers never observe a partially
/// classified state. Every coordinate inside has already been projected.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Overlay {
    tasks: Vec<TaskMarker>,
    skill_points: Vec<SkillPointMarker>,
    waypoints: Vec<WaypointMarker>,
    vistas: Vec<VistaMarker>,
    landmarks: Vec<LandmarkMarker>,
    map_labels: Vec<MapLabel>,
    sectors: Vec<SectorOverlay>,
}

impl Overlay {
    /// Assembles an overlay from its finished collections.
    #[must_use]
    pub fn new(
        tasks: Vec<TaskMarker>,
        skill_points: Vec<SkillPointMarker>,
        waypoints: Vec<WaypointMarker>,
        vistas: Vec<VistaMarker>,
        landmarks: Vec<LandmarkMarker>,
        map_labels: Vec<MapLabel>,
        sectors: Vec<SectorOverlay>,
    ) -> Self {
        Self {
            tasks,
            skill_points,
            waypoints,
            vistas,
            landmarks,
            map_labels,
            sectors,
        }
    }

    /// Task markers in document order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskMarker] {
        &self.tasks
    }

    /// Skill point markers in document order.
    #[must_use]
    pub fn skill_points(&self) -> &[SkillPointMarker] {
        &self.skill_points
    }

    /// Waypoint markers in document order.
    #[must_use]
    pub fn waypoints(&self) -> &[WaypointMarker] {
        &self.waypoints
    }

    /// Vista markers in document order.
    #[must_use]
    pub fn vistas(&self) -> &[VistaMarker] {
        &self.vistas
    }

    /// Landmark markers in document order.
    #[must_use]
    pub fn landmarks(&self) -> &[LandmarkMarker] {
        &self.landmarks
    }

    /// Labels for map areas admitted as significant.
    #[must_use]
    pub fn map_labels(&self) -> &[MapLabel] {
        &self.map_labels
    }

    /// Sectors with provenance, in document order.
    #[must_use]
    pub fn sectors(&self) -> &[SectorOverlay] {
        &self.sectors
    }

    /// Per-layer entry counts for the statistics display.
    #[must_use]
    pub fn stats(&self) -> OverlayStats {
        OverlayStats {
            tasks: self.tasks.len(),
            skill_points: self.skill_points.len(),
            waypoints: self.waypoints.len(),
            vistas: self.vistas.len(),
            landmarks: self.landmarks.len(),
            map_labels: self.map_labels.len(),
            sectors: self.sectors.len(),
        }
    }
}

/// Entry counts per overlay layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OverlayStats {
    /// Number of task markers.
    pub tasks: usize,
    /// Number of skill point markers.
    pub skill_points: usize,
    /// Number of waypoint markers.
    pub waypoints: usize,
    /// Number of vista markers.
    pub vistas: usize,
    /// Number of landmark markers.
    pub landmarks: usize,
    /// Number of admitted map labels.
    pub map_labels: usize,
    /// Number of sectors.
    pub sectors: usize,
}

#[cfg(test)]
mod tests {
    use super::{DisplayCoord, Projection, RawCoord, SectorOverlay, ZoomLevel};

    struct HalvingViewport;

    impl Projection for HalvingViewport {
        fn max_zoom(&self) -> ZoomLevel {
            ZoomLevel::new(1)
        }

        fn unproject(&self, coord: RawCoord, zoom: ZoomLevel) -> DisplayCoord {
            let scale = f64::from(zoom.get()) * 2.0;
            DisplayCoord::new(coord.y() / scale, coord.x() / scale)
        }
    }

    #[test]
    fn raw_coord_decodes_from_pair() {
        let coord: RawCoord = serde_json::from_str("[10752.0, 14592.0]").expect("decode");
        assert_eq!(coord, RawCoord::new(10752.0, 14592.0));
    }

    #[test]
    fn display_coord_encodes_as_pair() {
        let encoded = serde_json::to_string(&DisplayCoord::new(-1.5, 2.25)).expect("encode");
        assert_eq!(encoded, "[-1.5,2.25]");
    }

    #[test]
    fn to_display_queries_the_viewport_maximum_zoom() {
        let viewport = HalvingViewport;
        assert_eq!(
            viewport.to_display(RawCoord::new(8.0, 4.0)),
            DisplayCoord::new(2.0, 4.0),
        );
    }

    #[test]
    fn breadcrumb_joins_provenance_and_name() {
        let sector = SectorOverlay::new("Hill", Vec::new(), "Plains", "Tyria");
        assert_eq!(sector.breadcrumb(), "Tyria \u{25b6} Plains \u{25b6} Hill");
    }
}
