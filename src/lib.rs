//! Web Mercator tile cover computation.
//!
//! Given a geographic region — a bounding box, a screen-space viewport, or an
//! arbitrary GeoJSON-style geometry — and a target zoom level, this crate
//! computes the set of Web Mercator tiles that cover it.
//!
//! ## Bounding box cover
//!
//! ```rust
//! use tile_cover::{LatLng, LatLngBounds, tile_cover_bounds};
//!
//! let san_francisco = LatLngBounds::hull(
//!     LatLng::new(37.6609, -122.5744),
//!     LatLng::new(37.8271, -122.3204),
//! );
//! let cover = tile_cover_bounds(san_francisco, 10);
//! assert_eq!(cover.len(), 4);
//! ```
//!
//! ## Geometry cover
//!
//! ```rust
//! use tile_cover::{Geometry, LatLng, tile_cover_geometry};
//!
//! let point = Geometry::Point(LatLng::new(38.89225, -77.03355));
//! let cover = tile_cover_geometry(&point, 13);
//! assert_eq!(cover[0].x, 2343);
//! ```
//!
//! ## Offline region definitions
//!
//! ```rust
//! use tile_cover::{OfflineRegionDefinition, SourceType};
//!
//! let json = r#"{
//!     "style_url": "mapbox://styles/mapbox/streets-v11",
//!     "bounds": [37.6609, -122.5744, 37.8271, -122.3204],
//!     "min_zoom": 0,
//!     "max_zoom": 14,
//!     "pixel_ratio": 1.0
//! }"#;
//! let region = OfflineRegionDefinition::decode(json).unwrap();
//! let tiles = region.tile_cover(SourceType::Vector, 512, (0, 22));
//! assert!(!tiles.is_empty());
//! ```

mod dispatch;
mod errors;
mod geometry;
mod line_cover;
mod offline_region;
mod polygon_cover;
pub mod projection;
mod quad_cover;
pub mod scanline;
mod tile_cover;
mod tile_id;
mod transform_state;

pub use dispatch::{tile_count_geometry, tile_cover_geometry};
pub use errors::{Error, Result};
pub use geometry::{Geometry, LatLng, LatLngBounds, Point2D, Ring, LATITUDE_MAX};
pub use offline_region::OfflineRegionDefinition;
pub use projection::covering_zoom_level;
pub use tile_cover::{tile_count_bounds, tile_cover_bounds, tile_cover_viewport};
pub use tile_id::{CanonicalTileID, SourceType, UnwrappedTileID};
pub use transform_state::TransformState;
