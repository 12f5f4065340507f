//! The acquisition seam.
//!
//! Extraction talks to map data only through [`GraphProvider`], so the OSM
//! reader, an in-memory fixture, or any other backend can be swapped in
//! without touching projection or output.

use log::info;

use rg_core::BoundingBox;

use crate::filter::NetworkType;
use crate::graph::{RoadGraph, RoadNetworkGraph};
use crate::speed::{add_edge_speeds, add_edge_travel_times};
use crate::{NetworkError, NetworkResult};

/// Source of road graphs.
pub trait GraphProvider {
    /// Return the `network` slice of the road graph restricted to `bbox`.
    ///
    /// An empty result is an error ([`NetworkError::EmptyRegion`]), never an
    /// empty graph.
    fn fetch(&self, bbox: BoundingBox, network: NetworkType) -> NetworkResult<RoadGraph>;

    /// Annotate every edge with a free-flow speed and travel time.
    ///
    /// Best effort: edges that cannot be annotated keep `None`.
    fn enrich(&self, graph: &mut RoadGraph) {
        add_edge_speeds(graph);
        add_edge_travel_times(graph);
    }
}

impl<P: GraphProvider + ?Sized> GraphProvider for &P {
    fn fetch(&self, bbox: BoundingBox, network: NetworkType) -> NetworkResult<RoadGraph> {
        (**self).fetch(bbox, network)
    }

    fn enrich(&self, graph: &mut RoadGraph) {
        (**self).enrich(graph)
    }
}

// ── MemoryProvider ────────────────────────────────────────────────────────────

/// Serves slices of a graph already held in memory.
///
/// `fetch` clones the graph, truncates it to the box, and drops edges whose
/// `highway` class the requested network does not carry.
pub struct MemoryProvider {
    graph: RoadGraph,
}

impl MemoryProvider {
    pub fn new(graph: RoadGraph) -> Self {
        Self { graph }
    }
}

impl GraphProvider for MemoryProvider {
    fn fetch(&self, bbox: BoundingBox, network: NetworkType) -> NetworkResult<RoadGraph> {
        let mut graph = self.graph.clone();
        graph.retain_within(&bbox);
        graph.retain_edges(|e| network.admits_highway(e.attrs.highway.as_deref()));

        if graph.is_empty() {
            return Err(NetworkError::EmptyRegion { bbox, network });
        }
        info!(
            "in-memory {network} graph for {bbox}: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
