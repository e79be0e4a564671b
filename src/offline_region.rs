//! The offline region container: a user-facing description (style URL +
//! region + zoom range + pixel ratio) wrapping tile cover, plus its JSON
//! codec.

use crate::dispatch::{tile_cover_geometry, tile_count_geometry};
use crate::errors::{Error, Result};
use crate::geometry::{Geometry, LatLngBounds};
use crate::projection::covering_zoom_level;
use crate::tile_id::{CanonicalTileID, SourceType};

/// An immutable value describing the region a style should be downloaded for
/// offline use: a style URL, a region (bounds or arbitrary geometry) and a
/// zoom/pixel-ratio range. Constructors enforce the numeric invariants below;
/// every other operation is total.
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineRegionDefinition {
    pub style_url: String,
    pub geometry: Geometry,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pixel_ratio: f32,
}

impl OfflineRegionDefinition {
    /// Constructs a definition over an arbitrary geometry.
    pub fn new(
        style_url: impl Into<String>,
        geometry: Geometry,
        min_zoom: f64,
        max_zoom: f64,
        pixel_ratio: f32,
    ) -> Result<Self> {
        let definition = Self {
            style_url: style_url.into(),
            geometry,
            min_zoom,
            max_zoom,
            pixel_ratio,
        };
        definition.check_valid()?;
        Ok(definition)
    }

    /// Constructs a definition over a bounding box, lowering it to a closed
    /// rectangular polygon (the legacy representation).
    pub fn from_bounds(
        style_url: impl Into<String>,
        bounds: LatLngBounds,
        min_zoom: f64,
        max_zoom: f64,
        pixel_ratio: f32,
    ) -> Result<Self> {
        Self::new(style_url, Geometry::from_bounds(bounds), min_zoom, max_zoom, pixel_ratio)
    }

    fn check_valid(&self) -> Result<()> {
        if self.min_zoom < 0.0
            || !self.min_zoom.is_finite()
            || self.max_zoom < self.min_zoom
            || self.max_zoom.is_nan()
            || self.pixel_ratio < 0.0
            || !self.pixel_ratio.is_finite()
        {
            return Err(Error::InvalidDefinition(format!(
                "min_zoom={}, max_zoom={}, pixel_ratio={}",
                self.min_zoom, self.max_zoom, self.pixel_ratio
            )));
        }
        Ok(())
    }

    fn covering_zoom_range(&self, source_type: SourceType, tile_size: u16, zoom_range: (u8, u8)) -> (u8, u8) {
        let min_z = covering_zoom_level(self.min_zoom, source_type, tile_size).max(zoom_range.0 as i32);
        let max_z = covering_zoom_level(self.max_zoom, source_type, tile_size).min(zoom_range.1 as i32);
        (min_z.max(0) as u8, max_z.max(0) as u8)
    }

    /// Tiles covering the region at every integer zoom in the effective
    /// range, ordered by zoom ascending then by the per-zoom geometry cover
    /// order.
    pub fn tile_cover(&self, source_type: SourceType, tile_size: u16, zoom_range: (u8, u8)) -> Vec<CanonicalTileID> {
        let (min_z, max_z) = self.covering_zoom_range(source_type, tile_size, zoom_range);
        let mut result = Vec::new();
        if min_z > max_z {
            return result;
        }
        for z in min_z..=max_z {
            result.extend(tile_cover_geometry(&self.geometry, z).into_iter().map(|t| t.canonical()));
        }
        result
    }

    /// Sum of `tile_count` over every integer zoom in the effective range.
    pub fn tile_count(&self, source_type: SourceType, tile_size: u16, zoom_range: (u8, u8)) -> u64 {
        let (min_z, max_z) = self.covering_zoom_range(source_type, tile_size, zoom_range);
        if min_z > max_z {
            return 0;
        }
        (min_z..=max_z)
            .map(|z| tile_count_geometry(&self.geometry, z) as u64)
            .sum()
    }

    /// Decodes a region definition from the §6 JSON format.
    pub fn decode(json: &str) -> Result<Self> {
        let doc: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::MalformedRegionJson(e.to_string()))?;
        let obj = doc
            .as_object()
            .ok_or_else(|| Error::MalformedRegionJson("not a json object".into()))?;

        let style_url = obj
            .get("style_url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::MalformedRegionJson("missing or non-string style_url".into()))?
            .to_string();

        let geometry = Self::decode_geometry(obj)?;

        let min_zoom = obj
            .get("min_zoom")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| Error::MalformedRegionJson("missing or non-numeric min_zoom".into()))?;

        let max_zoom = match obj.get("max_zoom") {
            None => f64::INFINITY,
            Some(v) => v
                .as_f64()
                .ok_or_else(|| Error::MalformedRegionJson("non-numeric max_zoom".into()))?,
        };

        let pixel_ratio = obj
            .get("pixel_ratio")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| Error::MalformedRegionJson("missing or non-numeric pixel_ratio".into()))?
            as f32;

        Self::new(style_url, geometry, min_zoom, max_zoom, pixel_ratio)
    }

    /// `bounds` is legacy-only on decode: a valid bounds array must have
    /// exactly 4 numeric entries `[s, w, n, e]`. The original source treats
    /// `length != 4` as *valid*, which looks like an inverted check; this
    /// implementation requires `length == 4` instead (see DESIGN.md).
    fn decode_geometry(obj: &serde_json::Map<String, serde_json::Value>) -> Result<Geometry> {
        if let Some(bounds) = obj.get("bounds") {
            let arr = bounds
                .as_array()
                .ok_or_else(|| Error::MalformedRegionJson("bounds is not an array".into()))?;
            let valid = arr.len() == 4 && arr.iter().all(|v| v.is_number());
            if valid {
                let s = arr[0].as_f64().unwrap();
                let w = arr[1].as_f64().unwrap();
                let n = arr[2].as_f64().unwrap();
                let e = arr[3].as_f64().unwrap();
                return Ok(Geometry::from_bounds(LatLngBounds::new(s, w, n, e)));
            }
        }

        if let Some(geometry) = obj.get("geometry") {
            if geometry.is_object() {
                return Geometry::from_json(geometry)
                    .ok_or_else(|| Error::MalformedRegionJson("invalid geometry object".into()));
            }
        }

        Err(Error::MalformedRegionJson(
            "neither a well-formed bounds array nor a geometry object".into(),
        ))
    }

    /// Encodes to the §6 JSON format. `geometry` is always emitted (even for
    /// a definition built `from_bounds`); `max_zoom` is omitted iff it is
    /// non-finite.
    pub fn encode(&self) -> String {
        let mut obj = serde_json::Map::new();
        obj.insert("style_url".into(), serde_json::Value::String(self.style_url.clone()));
        obj.insert("geometry".into(), self.geometry.to_json());
        obj.insert(
            "min_zoom".into(),
            serde_json::Number::from_f64(self.min_zoom)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        );
        if self.max_zoom.is_finite() {
            obj.insert(
                "max_zoom".into(),
                serde_json::Number::from_f64(self.max_zoom)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            );
        }
        obj.insert(
            "pixel_ratio".into(),
            serde_json::Number::from_f64(self.pixel_ratio as f64)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        );
        serde_json::Value::Object(obj).to_string()
    }
}
