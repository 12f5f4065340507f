//! `rg-network` — road-network graph and the acquisition side of extraction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`graph`]    | `RoadNetworkGraph` trait, `RoadGraph`, `RoadGraphBuilder`   |
//! | [`filter`]   | `NetworkType`, drivable-way and one-way tag rules           |
//! | [`speed`]    | `add_edge_speeds`, `add_edge_travel_times`, `maxspeed` parsing |
//! | [`provider`] | `GraphProvider` trait, `MemoryProvider`                      |
//! | `ways`       | way → directed segment expansion (internal)                  |
//! | [`osm`]      | `OsmPbfProvider` (feature = `"osm"` only)                   |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF acquisition via the `osmpbf` crate.         |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod filter;
pub mod graph;
pub mod provider;
pub mod speed;

#[cfg_attr(not(feature = "osm"), allow(dead_code))]
mod ways;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{NetworkError, NetworkResult};
pub use filter::NetworkType;
pub use graph::{EdgeAttrs, GraphEdge, NodeAttrs, RoadGraph, RoadGraphBuilder, RoadNetworkGraph};
pub use provider::{GraphProvider, MemoryProvider};
pub use speed::{add_edge_speeds, add_edge_travel_times, parse_maxspeed, SpeedStats};

#[cfg(feature = "osm")]
pub use osm::OsmPbfProvider;
