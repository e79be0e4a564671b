//! Web Mercator projection from lon/lat into tile-space at a given zoom.

use crate::geometry::{LatLng, Point2D, LATITUDE_MAX};
use crate::tile_id::SourceType;
use std::f64::consts::PI;

/// Projects a geographic coordinate into tile-space at zoom `z`. Latitude is
/// clamped to `±85.05112878` (the Mercator pole limit) before projection.
/// `x` is left unclamped (antimeridian-crossing geometry legitimately
/// produces `x` outside `[0, 2^z]`); `y` is confined to `[0, 2^z)` since
/// latitude, unlike longitude, never wraps.
pub fn project(p: LatLng, z: u8) -> Point2D<f64> {
    project_at_scale(p, (1u64 << z) as f64)
}

/// [`project`] generalized to a continuous world scale, so viewport
/// projection can interpolate between integer zooms.
pub(crate) fn project_at_scale(p: LatLng, scale: f64) -> Point2D<f64> {
    let lat = p.lat.clamp(-LATITUDE_MAX, LATITUDE_MAX);
    let sin_lat = (lat * PI / 180.0).sin();
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * scale;
    // lat is clamped to the Mercator band, so y is mathematically within
    // [0, scale]; the sin/ln formula's float error can still land exactly on
    // `scale` at the pole limit, which floors to the tile one past the last
    // valid row. Pull the upper edge strictly inside so it floors correctly.
    let upper = scale - scale.max(1.0) * f64::EPSILON;
    let y = y.clamp(0.0, upper);

    // x is left unclamped beyond `scale` for antimeridian-crossing geometry,
    // but exactly `lon == 180` is the closing edge of the whole world, not a
    // wrap, and needs the same inward nudge so it floors onto the last tile
    // column rather than one past it.
    let x = (p.lon / 360.0 + 0.5) * scale;
    let x = if x == scale { x - scale.max(1.0) * f64::EPSILON } else { x };

    Point2D::new(x, y)
}

/// Computes the effective integer zoom for a source: `z' = zoom + log2(512 /
/// tile_size)`, rounded half-away-from-zero for `Raster`/`Video` sources
/// (closest visual LOD) and floored otherwise (no tile larger than requested).
pub fn covering_zoom_level(zoom: f64, source_type: SourceType, tile_size: u16) -> i32 {
    let z = zoom + (512.0 / tile_size as f64).log2();
    match source_type {
        SourceType::Raster | SourceType::Video => round_half_away_from_zero(z) as i32,
        _ => z.floor() as i32,
    }
}

fn round_half_away_from_zero(x: f64) -> f64 {
    if x >= 0.0 {
        (x + 0.5).floor()
    } else {
        (x - 0.5).ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn world_corners_at_zoom_zero() {
        let nw = project(LatLng::new(LATITUDE_MAX, -180.0), 0);
        assert_relative_eq!(nw.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(nw.y, 0.0, epsilon = 1e-6);

        let se = project(LatLng::new(-LATITUDE_MAX, 180.0), 0);
        assert_relative_eq!(se.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(se.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn equator_prime_meridian_is_centered() {
        let p = project(LatLng::new(0.0, 0.0), 4);
        assert_relative_eq!(p.x, 8.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn vector_floors_raster_rounds() {
        assert_eq!(covering_zoom_level(0.6, SourceType::Vector, 512), 0);
        assert_eq!(covering_zoom_level(0.6, SourceType::Raster, 512), 1);
        assert_eq!(covering_zoom_level(0.7, SourceType::Vector, 512), 0);
        assert_eq!(covering_zoom_level(0.7, SourceType::Raster, 512), 1);
    }

    #[test]
    fn tile_size_shifts_zoom() {
        assert_eq!(covering_zoom_level(0.0, SourceType::Vector, 512), 0);
        assert_eq!(covering_zoom_level(0.0, SourceType::Vector, 256), 1);
    }
}
