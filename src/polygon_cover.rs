//! Scan-line interior fill composed on top of [`crate::line_cover`]'s ring
//! boundary walk.

use crate::geometry::Ring;
use crate::line_cover::line_cover;

/// Covers a polygon (ordered rings, ring 0 outer) at `zoom`. Each ring
/// contributes its exact boundary tiles via [`line_cover`]; the per-row-entry
/// vertices it records are then scan-line filled to produce interior tiles.
pub fn polygon_cover(rings: &[Ring], zoom: u8) -> Vec<(i32, i32)> {
    let mut tiles = Vec::new();
    let mut intersections: Vec<(i32, i32)> = Vec::new();

    for points in rings {
        let mut ring = Vec::new();
        let cover = line_cover(points, zoom, Some(&mut ring));
        tiles.extend(cover);

        let n = ring.len();
        if n == 0 {
            continue;
        }
        for j in 0..n {
            let k = (j + n - 1) % n;
            let m = (j + 1) % n;
            let y = ring[j].1;
            // Keep row-entry j iff it is not a local extremum in y and the
            // next vertex doesn't share its row (dedupes horizontal runs).
            let not_local_min = y > ring[k].1 || y > ring[m].1;
            let not_local_max = y < ring[k].1 || y < ring[m].1;
            if not_local_min && not_local_max && y != ring[m].1 {
                intersections.push(ring[j]);
            }
        }
    }

    intersections.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut i = 0;
    while i + 1 < intersections.len() {
        let t0 = intersections[i];
        let t1 = intersections[i + 1];
        let y = t0.1;
        for x in (t0.0 + 1)..t1.0 {
            tiles.push((x, y));
        }
        i += 2;
    }

    tiles
}
