use serde::{Deserialize, Serialize};

/// A tile address that may reference copies of the world across the
/// antimeridian: `x` may be negative or exceed `2^z - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnwrappedTileID {
    pub z: u8,
    pub x: i32,
    pub y: i32,
}

impl UnwrappedTileID {
    pub fn new(z: u8, x: i32, y: i32) -> Self {
        Self { z, x, y }
    }

    /// Wraps `x` into `[0, 2^z)` by modular reduction.
    pub fn canonical(&self) -> CanonicalTileID {
        let tiles = 1i64 << self.z;
        let x = (self.x as i64).rem_euclid(tiles) as u32;
        CanonicalTileID::new(self.z, x, self.y as u32)
    }
}

/// A tile address with `0 <= x, y < 2^z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalTileID {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl CanonicalTileID {
    pub fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

/// The kind of source a tile cover is computed for. Only `Raster` and `Video`
/// change the zoom rounding rule in [`crate::projection::covering_zoom_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Vector,
    Raster,
    RasterDem,
    GeoJson,
    Video,
    Image,
    Annotations,
    CustomVector,
}
