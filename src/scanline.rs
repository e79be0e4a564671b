//! Scan-line rasterization of a quadrilateral's two triangles, the primitive
//! [`crate::quad_cover`] is built on. Ported from the polymaps scan-line
//! conversion (`src/Layer.js`); the edge-order tie-break in [`scan_spans`] is
//! load-bearing and must not be paraphrased — it decides which side of each
//! edge counts as "outside" and therefore which tiles land on the boundary.

use crate::geometry::Point2D;

/// A triangle edge, always stored with `(x0, y0)` as the lower-y endpoint so
/// that `dy >= 0`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Edge {
    pub fn new(a: Point2D<f64>, b: Point2D<f64>) -> Self {
        let (a, b) = if a.y > b.y { (b, a) } else { (a, b) };
        Edge {
            x0: a.x,
            y0: a.y,
            x1: b.x,
            y1: b.y,
            dx: b.x - a.x,
            dy: b.y - a.y,
        }
    }
}

/// Emits `(x0, x1, y)` horizontal spans for each integer row the two edges
/// cover, clipped to `[ymin, ymax)`.
pub fn scan_spans(mut e0: Edge, mut e1: Edge, ymin: i32, ymax: i32, mut emit: impl FnMut(i32, i32, i32)) {
    let y0 = (ymin as f64).max(e1.y0.floor());
    let y1 = (ymax as f64).min(e1.y1.ceil());

    let shares_lower_endpoint = e0.x0 == e1.x0 && e0.y0 == e1.y0;
    let swap = if shares_lower_endpoint {
        e0.x0 + e1.dy / e0.dy * e0.dx < e1.x1
    } else {
        e0.x1 - e1.dy / e0.dy * e0.dx < e1.x0
    };
    if swap {
        std::mem::swap(&mut e0, &mut e1);
    }

    let m0 = e0.dx / e0.dy;
    let m1 = e1.dx / e1.dy;
    let d0 = if e0.dx > 0.0 { 1.0 } else { 0.0 };
    let d1 = if e1.dx < 0.0 { 1.0 } else { 0.0 };

    let mut y = y0 as i32;
    while (y as f64) < y1 {
        let x0 = m0 * (0.0_f64).max((y as f64 + d0 - e0.y0).min(e0.dy)) + e0.x0;
        let x1 = m1 * (0.0_f64).max((y as f64 + d1 - e1.y0).min(e1.dy)) + e1.x0;
        emit(x1.floor() as i32, x0.ceil() as i32, y);
        y += 1;
    }
}

/// Decomposes a triangle into its three edges and scans the two shorter ones
/// against the longest (the "spine"), skipping any horizontal (`dy == 0`)
/// edge.
pub fn scan_triangle(
    a: Point2D<f64>,
    b: Point2D<f64>,
    c: Point2D<f64>,
    ymin: i32,
    ymax: i32,
    mut emit: impl FnMut(i32, i32, i32),
) {
    let mut ab = Edge::new(a, b);
    let mut bc = Edge::new(b, c);
    let mut ca = Edge::new(c, a);

    if ab.dy > bc.dy {
        std::mem::swap(&mut ab, &mut bc);
    }
    if ab.dy > ca.dy {
        std::mem::swap(&mut ab, &mut ca);
    }
    if bc.dy > ca.dy {
        std::mem::swap(&mut bc, &mut ca);
    }

    if ab.dy != 0.0 {
        scan_spans(ca, ab, ymin, ymax, &mut emit);
    }
    if bc.dy != 0.0 {
        scan_spans(ca, bc, ymin, ymax, &mut emit);
    }
}
