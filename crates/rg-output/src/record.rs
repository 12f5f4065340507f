//! Plain record types making up the output artifact.
//!
//! Field names are the on-disk format: consumers key on exactly `nodes`,
//! `edges`, `id`, `lat`, `lon`, `source`, `target`, `distance` and
//! `travel_time`.

use serde::{Deserialize, Serialize};

use rg_core::OsmNodeId;

/// One graph node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id:  OsmNodeId,
    pub lat: f64,
    pub lon: f64,
}

/// One directed edge.  `distance` is in metres, `travel_time` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source:      OsmNodeId,
    pub target:      OsmNodeId,
    pub distance:    f64,
    /// Written as `null` when no estimate could be derived.
    pub travel_time: Option<f64>,
}

/// The complete artifact: every node and every edge, in graph order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializedGraph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl SerializedGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with no travel-time estimate.
    pub fn travel_time_gaps(&self) -> usize {
        self.edges.iter().filter(|e| e.travel_time.is_none()).count()
    }
}
