//! Graph → record projection.
//!
//! Node positions are stored geometrically (`x` = longitude, `y` =
//! latitude); records are semantic (`lat`, `lon`).  The mapping is
//! `lat ← y`, `lon ← x`, nothing else.

use rg_network::RoadNetworkGraph;
use rg_output::{EdgeRecord, NodeRecord, SerializedGraph};

/// Emit one record per node and one per directed edge, in the graph's own
/// iteration order.  Parallel edges stay distinct; missing travel times stay
/// missing.
pub fn project<G: RoadNetworkGraph>(graph: &G) -> SerializedGraph {
    let mut nodes = Vec::with_capacity(graph.node_count());
    nodes.extend(graph.nodes().map(|(id, attrs)| NodeRecord {
        id,
        lat: attrs.y,
        lon: attrs.x,
    }));

    let mut edges = Vec::with_capacity(graph.edge_count());
    edges.extend(graph.edges().map(|(source, target, attrs)| EdgeRecord {
        source,
        target,
        distance:    attrs.length,
        travel_time: attrs.travel_time,
    }));

    SerializedGraph { nodes, edges }
}
