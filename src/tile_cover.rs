//! Top-level `tile_cover`/`tile_count` entry points over bounds and
//! viewports. The geometry overload lives in [`crate::dispatch`].

use crate::geometry::{LatLngBounds, Point2D, LATITUDE_MAX};
use crate::projection::project;
use crate::quad_cover::quad_cover;
use crate::tile_id::UnwrappedTileID;
use crate::transform_state::TransformState;

/// Covers a bounding box at zoom `z`. Returns an empty cover for an empty
/// box, or one that lies entirely above `+85.0511` or below `-85.0511`
/// (wholly inside a polar cap); otherwise the box is clamped to the Mercator
/// latitude band before projecting its corners.
pub fn tile_cover_bounds(bounds: LatLngBounds, z: u8) -> Vec<UnwrappedTileID> {
    if bounds.is_empty() || bounds.south > LATITUDE_MAX || bounds.north < -LATITUDE_MAX {
        return Vec::new();
    }

    let clamped = LatLngBounds::new(
        bounds.south.max(-LATITUDE_MAX),
        bounds.west,
        bounds.north.min(LATITUDE_MAX),
        bounds.east,
    );

    let result = quad_cover(
        project(clamped.north_west(), z),
        project(clamped.north_east(), z),
        project(clamped.south_east(), z),
        project(clamped.south_west(), z),
        project(clamped.center(), z),
        z,
    );
    result
}

/// Covers the current viewport at zoom `z`, reading the four screen corners
/// and the screen center from `state`.
pub fn tile_cover_viewport(state: &TransformState, z: u8) -> Vec<UnwrappedTileID> {
    let w = state.width;
    let h = state.height;
    quad_cover(
        state.from_screen_coordinate(Point2D::new(0.0, 0.0), z),
        state.from_screen_coordinate(Point2D::new(w, 0.0), z),
        state.from_screen_coordinate(Point2D::new(w, h), z),
        state.from_screen_coordinate(Point2D::new(0.0, h), z),
        state.from_screen_coordinate(Point2D::new(w / 2.0, h / 2.0), z),
        z,
    )
}

/// Closed-form tile count for a bounding box, equivalent to
/// `tile_cover_bounds(bounds, z).len()` when no polar clipping occurs.
pub fn tile_count_bounds(bounds: LatLngBounds, z: u8) -> u64 {
    if z == 0 {
        return 1;
    }
    let sw = project(bounds.south_west(), z);
    let ne = project(bounds.north_east(), z);
    let max_tile = (1u64 << z) as f64;

    let x1 = sw.x.floor();
    let x2 = ne.x.ceil() - 1.0;
    let y1 = ne_sw_clamp(sw.y, max_tile);
    let y2 = ne_sw_clamp(ne.y, max_tile);

    let dx = if x1 > x2 { (max_tile - x1) + x2 } else { x2 - x1 };
    let dy = (y1 - y2).abs();

    ((dx + 1.0) * (dy + 1.0)) as u64
}

fn ne_sw_clamp(y: f64, max_tile: f64) -> f64 {
    y.floor().clamp(0.0, max_tile - 1.0)
}
