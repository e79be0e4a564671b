//! Dispatches [`Geometry`] to the coverer matching its variant, then sorts
//! and deduplicates the combined result.

use crate::geometry::Geometry;
use crate::line_cover::line_cover;
use crate::polygon_cover::polygon_cover;
use crate::projection::project;
use crate::tile_id::UnwrappedTileID;

fn dispatch(geom: &Geometry, zoom: u8) -> Vec<(i32, i32)> {
    match geom {
        Geometry::Point(p) => {
            let projected = project(*p, zoom);
            vec![(projected.x.floor() as i32, projected.y.floor() as i32)]
        }
        Geometry::MultiPoint(points) => points
            .iter()
            .map(|p| {
                let projected = project(*p, zoom);
                (projected.x.floor() as i32, projected.y.floor() as i32)
            })
            .collect(),
        Geometry::LineString(points) => line_cover(points, zoom, None),
        Geometry::MultiLineString(lines) => lines
            .iter()
            .flat_map(|line| line_cover(line, zoom, None))
            .collect(),
        Geometry::Polygon(rings) => polygon_cover(rings, zoom),
        Geometry::MultiPolygon(polygons) => polygons
            .iter()
            .flat_map(|rings| polygon_cover(rings, zoom))
            .collect(),
        Geometry::GeometryCollection(geometries) => {
            geometries.iter().flat_map(|g| dispatch(g, zoom)).collect()
        }
    }
}

/// Covers an arbitrary geometry at `zoom`, sorted by `(y, x)` with adjacent
/// duplicates removed.
pub fn tile_cover_geometry(geom: &Geometry, zoom: u8) -> Vec<UnwrappedTileID> {
    let mut tiles = dispatch(geom, zoom);
    tiles.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    tiles.dedup();

    tiles
        .into_iter()
        .map(|(x, y)| UnwrappedTileID::new(zoom, x, y))
        .collect()
}

/// `tile_cover_geometry(geom, zoom).len()`.
pub fn tile_count_geometry(geom: &Geometry, zoom: u8) -> usize {
    tile_cover_geometry(geom, zoom).len()
}
