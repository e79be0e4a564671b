//! A minimal, read-only viewport projection. This is the only slice of the
//! enclosing map renderer's transform state this crate owns: camera
//! animation, gesture handling and rendering are out of scope.

use crate::geometry::{LatLng, Point2D};
use crate::projection::project_at_scale;

/// The pixel size one tile occupies at integer zoom, matching the
/// `util::tileSize` constant the source rounding rule is expressed in terms
/// of (`covering_zoom_level`'s `512 / tile_size` ratio).
const TILE_PIXEL_SIZE: f64 = 512.0;

/// A screen-space viewport: size, focal point and camera orientation.
/// `bearing_deg` is clockwise rotation from north; `pitch_deg` is the camera
/// tilt away from straight-down (`0` = looking straight down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub width: f64,
    pub height: f64,
    pub center: LatLng,
    pub zoom: f64,
    pub bearing_deg: f64,
    pub pitch_deg: f64,
}

impl TransformState {
    pub fn new(width: f64, height: f64, center: LatLng, zoom: f64) -> Self {
        Self {
            width,
            height,
            center,
            zoom,
            bearing_deg: 0.0,
            pitch_deg: 0.0,
        }
    }

    /// Projects a screen coordinate (origin top-left, `y` down) into
    /// tile-space at `zoom`.
    pub fn from_screen_coordinate(&self, screen: Point2D<f64>, zoom: u8) -> Point2D<f64> {
        let dx = screen.x - self.width / 2.0;
        let mut dy = screen.y - self.height / 2.0;

        // Foreshorten the vertical offset for a tilted camera: rows further
        // from the horizon line cover more ground per screen pixel.
        let pitch = self.pitch_deg.to_radians();
        if pitch != 0.0 {
            dy /= pitch.cos();
        }

        let bearing = -self.bearing_deg.to_radians();
        let (sin_b, cos_b) = bearing.sin_cos();
        let rotated_x = dx * cos_b - dy * sin_b;
        let rotated_y = dx * sin_b + dy * cos_b;

        let scale = (zoom as f64 - self.zoom).exp2();
        let center = project_at_scale(self.center, (1u64 << zoom) as f64);
        Point2D::new(
            center.x + rotated_x / TILE_PIXEL_SIZE * scale,
            center.y + rotated_y / TILE_PIXEL_SIZE * scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn screen_center_matches_projected_center() {
        let state = TransformState::new(1024.0, 768.0, LatLng::new(37.7749, -122.4194), 10.0);
        let from_screen = state.from_screen_coordinate(Point2D::new(512.0, 384.0), 10);
        let projected = project_at_scale(state.center, 1024.0);
        assert_relative_eq!(from_screen.x, projected.x, epsilon = 1e-9);
        assert_relative_eq!(from_screen.y, projected.y, epsilon = 1e-9);
    }

    #[test]
    fn bearing_rotates_screen_right_into_tile_space_down() {
        let mut state = TransformState::new(1024.0, 768.0, LatLng::new(0.0, 0.0), 4.0);
        state.bearing_deg = 90.0;
        // A point to the right of center, with north rotated 90 degrees
        // clockwise to point screen-right, should land straight above center
        // in tile space rather than to its right.
        let p = state.from_screen_coordinate(Point2D::new(612.0, 384.0), 4);
        let center = project_at_scale(state.center, 16.0);
        assert_relative_eq!(p.x, center.x, epsilon = 1e-9);
        assert!(p.y < center.y);
    }
}
