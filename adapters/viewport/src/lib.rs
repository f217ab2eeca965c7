#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Tile-viewport adapter implementing the shared [`Projection`] port.
//!
//! [`TileViewport`] follows the CRS.Simple convention for fixed-resolution
//! pixel maps: at zoom `z` one display unit covers `2^z` source pixels, the
//! x axis maps to longitude, and the y-down pixel axis is negated into
//! latitude. Any other viewport convention can replace this adapter by
//! implementing [`Projection`]; the classifier never sees the formula.

use glam::DVec2;
use overworld_core::{DisplayCoord, Projection, RawCoord, ZoomLevel};

/// Pannable tile viewport with a fixed maximum zoom level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileViewport {
    max_zoom: ZoomLevel,
}

impl TileViewport {
    /// Creates a viewport configured for the given maximum zoom.
    #[must_use]
    pub const fn new(max_zoom: ZoomLevel) -> Self {
        Self { max_zoom }
    }

    /// Converts a display coordinate back into raw pixel space.
    ///
    /// Inverse of [`Projection::unproject`] at the same zoom; used to
    /// report in-game positions for display coordinates picked on the map.
    #[must_use]
    pub fn project(&self, coord: DisplayCoord, zoom: ZoomLevel) -> RawCoord {
        let scaled = DVec2::new(coord.lng(), -coord.lat()) * scale(zoom);
        RawCoord::new(scaled.x, scaled.y)
    }
}

impl Projection for TileViewport {
    fn max_zoom(&self) -> ZoomLevel {
        self.max_zoom
    }

    fn unproject(&self, coord: RawCoord, zoom: ZoomLevel) -> DisplayCoord {
        let point = DVec2::new(coord.x(), coord.y()) / scale(zoom);
        DisplayCoord::new(-point.y, point.x)
    }
}

/// Source pixels covered by one display unit at the given zoom.
fn scale(zoom: ZoomLevel) -> f64 {
    2f64.powi(i32::from(zoom.get()))
}

#[cfg(test)]
mod tests {
    use super::TileViewport;
    use overworld_core::{DisplayCoord, Projection, RawCoord, ZoomLevel};

    #[test]
    fn unproject_divides_by_the_zoom_scale_and_negates_y() {
        let viewport = TileViewport::new(ZoomLevel::new(7));
        let display = viewport.unproject(RawCoord::new(10752.0, 14592.0), ZoomLevel::new(7));
        assert_eq!(display, DisplayCoord::new(-114.0, 84.0));
    }

    #[test]
    fn to_display_uses_the_configured_maximum_zoom() {
        let viewport = TileViewport::new(ZoomLevel::new(3));
        assert_eq!(
            viewport.to_display(RawCoord::new(16.0, 8.0)),
            viewport.unproject(RawCoord::new(16.0, 8.0), ZoomLevel::new(3)),
        );
        assert_eq!(
            viewport.to_display(RawCoord::new(16.0, 8.0)),
            DisplayCoord::new(-1.0, 2.0),
        );
    }

    #[test]
    fn project_inverts_unproject_at_the_same_zoom() {
        let viewport = TileViewport::new(ZoomLevel::new(7));
        let raw = RawCoord::new(10752.0, 14592.0);
        let display = viewport.unproject(raw, ZoomLevel::new(7));
        assert_eq!(viewport.project(display, ZoomLevel::new(7)), raw);
    }

    #[test]
    fn zoom_zero_is_the_identity_scale() {
        let viewport = TileViewport::new(ZoomLevel::new(0));
        assert_eq!(
            viewport.unproject(RawCoord::new(5.0, 3.0), ZoomLevel::new(0)),
            DisplayCoord::new(-3.0, 5.0),
        );
    }
}
