//! Tile cover of a projected quadrilateral, ordered by distance to a focal
//! center. Used for both bounding-box and viewport cover.

use crate::geometry::Point2D;
use crate::scanline::scan_triangle;
use crate::tile_id::UnwrappedTileID;

struct Candidate {
    x: i32,
    y: i32,
    sq_dist: f64,
}

/// Covers the quadrilateral `tl, tr, br, bl` at zoom `z`, ordering tiles by
/// squared distance to `center` so that viewport/bounds consumers see the
/// nearest tiles first. The quad is split into two triangles sharing the
/// `tl`-`br` diagonal; shared-diagonal tiles are deduplicated after sorting.
pub fn quad_cover(
    tl: Point2D<f64>,
    tr: Point2D<f64>,
    br: Point2D<f64>,
    bl: Point2D<f64>,
    center: Point2D<f64>,
    z: u8,
) -> Vec<UnwrappedTileID> {
    let tiles = 1i32 << z;
    let mut candidates = Vec::new();

    let mut scan_line = |x0: i32, x1: i32, y: i32| {
        if y >= 0 && y <= tiles {
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                candidates.push(Candidate {
                    x,
                    y,
                    sq_dist: dx * dx + dy * dy,
                });
            }
        }
    };

    scan_triangle(tl, tr, br, 0, tiles, &mut scan_line);
    scan_triangle(br, bl, tl, 0, tiles, &mut scan_line);

    candidates.sort_by(|a, b| {
        a.sq_dist
            .partial_cmp(&b.sq_dist)
            .unwrap()
            .then(a.x.cmp(&b.x))
            .then(a.y.cmp(&b.y))
    });
    candidates.dedup_by(|a, b| a.x == b.x && a.y == b.y);

    candidates
        .into_iter()
        .map(|c| UnwrappedTileID::new(z, c.x, c.y))
        .collect()
}
