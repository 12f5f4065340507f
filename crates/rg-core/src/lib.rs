//! `rg-core` — foundational types for the road-graph extractor.
//!
//! This crate has no `rg-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, haversine distance                          |
//! | [`bbox`]   | `BoundingBox`, `build_bbox`                               |
//! | [`ids`]    | `OsmNodeId`, `OsmWayId`                                   |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod bbox;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bbox::{build_bbox, BoundingBox};
pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::{OsmNodeId, OsmWayId};
