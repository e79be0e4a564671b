//! Fast Voxel Traversal (Amanatides & Woo) over a polyline, ported from the
//! `tile-cover` JS library. Each step of the inner loop crosses exactly one
//! grid line, so the result never skips a tile the line passes through.

use crate::geometry::LatLng;
use crate::projection::project;

/// Traverses the polyline's segments in tile-space at `zoom`, returning every
/// tile it passes through in order. `(prev_x, prev_y)` is the only state that
/// persists across segments, avoiding a duplicate emission of the vertex
/// shared by two consecutive segments; a fresh ring resets it.
///
/// When `ring` is `Some`, each row-entry (the first tile touched after `y`
/// changes) is additionally recorded there for [`crate::polygon_cover`] to
/// scan-line fill from. If the ring closes (last recorded row equals the
/// first), the duplicate wrap-around entry is dropped.
pub fn line_cover(points: &[LatLng], zoom: u8, mut ring: Option<&mut Vec<(i32, i32)>>) -> Vec<(i32, i32)> {
    let mut tiles: Vec<(i32, i32)> = Vec::new();
    if points.is_empty() {
        return tiles;
    }

    let mut prev_point = project(points[0], zoom);
    let mut prev_x = i32::MAX;
    let mut prev_y = i32::MAX;
    let mut last_y = 0i32;

    for point in &points[1..] {
        let p0 = prev_point;
        let p1 = project(*point, zoom);
        prev_point = p1;

        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        if dx == 0.0 && dy == 0.0 {
            continue;
        }

        let xi: i32 = if dx > 0.0 { 1 } else { -1 };
        let yi: i32 = if dy > 0.0 { 1 } else { -1 };

        let mut x = p0.x.floor() as i32;
        let mut y = p0.y.floor() as i32;

        let mut t_max_x = if dx == 0.0 {
            f64::INFINITY
        } else {
            (((dx > 0.0) as i32 as f64) + x as f64 - p0.x) / dx
        }
        .abs();
        let mut t_max_y = if dy == 0.0 {
            f64::INFINITY
        } else {
            (((dy > 0.0) as i32 as f64) + y as f64 - p0.y) / dy
        }
        .abs();

        let t_delta_x = (xi as f64 / dx).abs();
        let t_delta_y = (yi as f64 / dy).abs();

        if prev_x != x || prev_y != y {
            tiles.push((x, y));
            if let Some(ring) = ring.as_deref_mut() {
                if y != prev_y {
                    ring.push((x, y));
                }
            }
            prev_x = x;
            prev_y = y;
        }

        while t_max_x < 1.0 || t_max_y < 1.0 {
            if t_max_x < t_max_y {
                t_max_x += t_delta_x;
                x += xi;
            } else {
                t_max_y += t_delta_y;
                y += yi;
            }
            tiles.push((x, y));
            if let Some(ring) = ring.as_deref_mut() {
                if y != prev_y {
                    ring.push((x, y));
                }
            }
            prev_x = x;
            prev_y = y;
        }

        last_y = y;
    }

    if let Some(ring) = ring {
        if let Some(first) = ring.first() {
            if last_y == first.1 {
                ring.pop();
            }
        }
    }

    tiles
}
