//! Acquisition error type.

use thiserror::Error;

use rg_core::{BoundingBox, OsmNodeId};

/// Errors produced while obtaining a road graph.  Any of these aborts the
/// extraction; there is no partial graph.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no {network} network found inside {bbox}")]
    EmptyRegion { bbox: BoundingBox, network: crate::NetworkType },

    #[error("edge references node {0} which is not in the graph")]
    UnknownNode(OsmNodeId),

    #[error("unknown network type {0:?}")]
    UnknownNetworkType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(#[from] osmpbf::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
