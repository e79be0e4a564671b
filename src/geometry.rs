//! Plain-data geometry types: points, bounds and the GeoJSON-shaped [`Geometry`] enum.

/// A `(x, y)` pair. `T` is either `f64` (projected/world space) or `i32` (tile-grid space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2D<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A geographic coordinate. Longitude is **not** canonicalized: values beyond
/// `±180` are preserved so that callers wrapping around the antimeridian
/// round-trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The Mercator latitude band: projection is undefined outside `±85.05112878°`.
pub const LATITUDE_MAX: f64 = 85.05112878;

/// An axis-aligned `(south, west, north, east)` box in lon/lat space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// An empty box: `south > north` so every containment/intersection test is false.
    /// Uses finite sentinels (the poles/antimeridian) rather than `f64::MAX` so a
    /// bounds-derived [`Geometry::from_bounds`] polygon still has sane corner
    /// coordinates when a caller covers it without checking `is_empty` first.
    pub fn empty() -> Self {
        Self::new(90.0, 180.0, -90.0, -180.0)
    }

    pub fn is_empty(&self) -> bool {
        self.south > self.north
    }

    /// The whole Mercator-projectable world.
    pub fn world() -> Self {
        Self::new(-LATITUDE_MAX, -180.0, LATITUDE_MAX, 180.0)
    }

    /// A zero-area box at a single point.
    pub fn singleton(p: LatLng) -> Self {
        Self::new(p.lat, p.lon, p.lat, p.lon)
    }

    /// The smallest axis-aligned box containing both points. Longitude is
    /// taken as given (not normalized into `[-180, 180]`), so a caller who
    /// wants a box expressed on the far side of the antimeridian can still
    /// get one by passing both points already shifted into that range.
    pub fn hull(a: LatLng, b: LatLng) -> Self {
        Self::new(a.lat.min(b.lat), a.lon.min(b.lon), a.lat.max(b.lat), a.lon.max(b.lon))
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north, self.west)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south, self.east)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }
}

/// A single linear ring: a sequence of lon/lat points. No validity repair is
/// performed; rings are assumed closed or open consistently per input.
pub type Ring = Vec<LatLng>;

/// A tagged sum over the seven GeoJSON geometry variants this crate covers.
/// Matched exhaustively by [`crate::dispatch::tile_cover_geometry`] rather than
/// dispatched through a class hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(LatLng),
    MultiPoint(Vec<LatLng>),
    LineString(Vec<LatLng>),
    MultiLineString(Vec<Vec<LatLng>>),
    /// Ordered rings; ring 0 is the outer ring, the rest are holes.
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Lowers an axis-aligned box to a closed rectangular outer ring, the
    /// shape legacy `bounds`-based region definitions are given as. An empty
    /// box lowers to a polygon with no rings rather than its literal (and
    /// self-crossing) corner rectangle, so a region built over an empty
    /// bounds always covers to nothing instead of the scan-line fill's
    /// edge-case behavior on a degenerate ring (see DESIGN.md).
    pub fn from_bounds(bounds: LatLngBounds) -> Self {
        if bounds.is_empty() {
            return Geometry::Polygon(Vec::new());
        }
        let ring = vec![
            LatLng::new(bounds.south, bounds.west),
            LatLng::new(bounds.south, bounds.east),
            LatLng::new(bounds.north, bounds.east),
            LatLng::new(bounds.north, bounds.west),
            LatLng::new(bounds.south, bounds.west),
        ];
        Geometry::Polygon(vec![ring])
    }

    /// Encodes to a standard GeoJSON geometry object
    /// (`{"type": ..., "coordinates": [...]}`, or `geometries` for a
    /// collection).
    pub fn to_json(&self) -> serde_json::Value {
        fn coord(p: &LatLng) -> serde_json::Value {
            serde_json::json!([p.lon, p.lat])
        }
        fn ring_json(ring: &Ring) -> serde_json::Value {
            serde_json::Value::Array(ring.iter().map(coord).collect())
        }

        match self {
            Geometry::Point(p) => serde_json::json!({"type": "Point", "coordinates": coord(p)}),
            Geometry::MultiPoint(points) => serde_json::json!({
                "type": "MultiPoint",
                "coordinates": points.iter().map(coord).collect::<Vec<_>>(),
            }),
            Geometry::LineString(points) => serde_json::json!({
                "type": "LineString",
                "coordinates": points.iter().map(coord).collect::<Vec<_>>(),
            }),
            Geometry::MultiLineString(lines) => serde_json::json!({
                "type": "MultiLineString",
                "coordinates": lines.iter().map(|l| l.iter().map(coord).collect::<Vec<_>>()).collect::<Vec<_>>(),
            }),
            Geometry::Polygon(rings) => serde_json::json!({
                "type": "Polygon",
                "coordinates": rings.iter().map(ring_json).collect::<Vec<_>>(),
            }),
            Geometry::MultiPolygon(polygons) => serde_json::json!({
                "type": "MultiPolygon",
                "coordinates": polygons.iter().map(|rings| rings.iter().map(ring_json).collect::<Vec<_>>()).collect::<Vec<_>>(),
            }),
            Geometry::GeometryCollection(geometries) => serde_json::json!({
                "type": "GeometryCollection",
                "geometries": geometries.iter().map(Geometry::to_json).collect::<Vec<_>>(),
            }),
        }
    }

    /// Decodes a standard GeoJSON geometry object. Returns `None` on any
    /// structural mismatch; the caller maps that to `MalformedRegionJson`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        fn coord(v: &serde_json::Value) -> Option<LatLng> {
            let arr = v.as_array()?;
            let lon = arr.first()?.as_f64()?;
            let lat = arr.get(1)?.as_f64()?;
            Some(LatLng::new(lat, lon))
        }
        fn coords(v: &serde_json::Value) -> Option<Vec<LatLng>> {
            v.as_array()?.iter().map(coord).collect()
        }
        fn rings(v: &serde_json::Value) -> Option<Vec<Ring>> {
            v.as_array()?.iter().map(coords).collect()
        }

        let obj = value.as_object()?;
        let ty = obj.get("type")?.as_str()?;
        let coordinates = || obj.get("coordinates");

        match ty {
            "Point" => Some(Geometry::Point(coord(coordinates()?)?)),
            "MultiPoint" => Some(Geometry::MultiPoint(coords(coordinates()?)?)),
            "LineString" => Some(Geometry::LineString(coords(coordinates()?)?)),
            "MultiLineString" => {
                let lines = coordinates()?
                    .as_array()?
                    .iter()
                    .map(coords)
                    .collect::<Option<Vec<_>>>()?;
                Some(Geometry::MultiLineString(lines))
            }
            "Polygon" => Some(Geometry::Polygon(rings(coordinates()?)?)),
            "MultiPolygon" => {
                let polygons = coordinates()?
                    .as_array()?
                    .iter()
                    .map(rings)
                    .collect::<Option<Vec<_>>>()?;
                Some(Geometry::MultiPolygon(polygons))
            }
            "GeometryCollection" => {
                let geometries = obj
                    .get("geometries")?
                    .as_array()?
                    .iter()
                    .map(Geometry::from_json)
                    .collect::<Option<Vec<_>>>()?;
                Some(Geometry::GeometryCollection(geometries))
            }
            _ => None,
        }
    }
}
