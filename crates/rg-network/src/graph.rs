//! Directed road multigraph.
//!
//! # Data layout
//!
//! Nodes are stored in insertion order as parallel `Vec`s (`node_ids`,
//! `node_attrs`) with an `FxHashMap` from OSM id to position.  Edges are a
//! flat `Vec<GraphEdge>`, also in insertion order.  Nothing is sorted and
//! nothing is deduplicated: two ways sharing a segment produce two parallel
//! edges, and iteration order is exactly the order the acquisition step
//! produced.
//!
//! # Attribute convention
//!
//! Node positions follow the geometric `(x, y)` convention: `x` is
//! longitude, `y` is latitude.  Use [`NodeAttrs::position`] to get a
//! `(lat, lon)` [`Coordinate`] without transposing by hand.

use rustc_hash::FxHashMap;

use rg_core::{BoundingBox, Coordinate, OsmNodeId, OsmWayId};

use crate::{NetworkError, NetworkResult};

// ── Attributes ────────────────────────────────────────────────────────────────

/// Per-node attributes.  `x` = longitude, `y` = latitude.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeAttrs {
    pub x: f64,
    pub y: f64,
}

impl NodeAttrs {
    #[inline]
    pub fn from_position(pos: Coordinate) -> Self {
        Self { x: pos.lon, y: pos.lat }
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.y, self.x)
    }
}

/// Per-edge attributes.
///
/// `length` is required.  Everything else is optional: tags may be missing
/// from the source data, and `speed_kph` / `travel_time` are only filled in
/// by the enrichment pass (see [`crate::speed`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAttrs {
    /// Way this segment belongs to.
    pub way: OsmWayId,
    /// Segment length in metres.
    pub length: f64,
    /// Raw `highway=*` class, e.g. `"residential"`.
    pub highway: Option<String>,
    /// Raw `maxspeed=*` tag value, unparsed.
    pub maxspeed: Option<String>,
    pub oneway: bool,
    /// Free-flow speed in km/h.
    pub speed_kph: Option<f64>,
    /// Free-flow traversal time in seconds.
    pub travel_time: Option<f64>,
}

impl EdgeAttrs {
    pub fn new(way: OsmWayId, length: f64) -> Self {
        Self {
            way,
            length,
            highway:     None,
            maxspeed:    None,
            oneway:      false,
            speed_kph:   None,
            travel_time: None,
        }
    }

    pub fn with_highway(mut self, highway: impl Into<String>) -> Self {
        self.highway = Some(highway.into());
        self
    }

    pub fn with_maxspeed(mut self, maxspeed: impl Into<String>) -> Self {
        self.maxspeed = Some(maxspeed.into());
        self
    }
}

/// One directed edge.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
    pub source: OsmNodeId,
    pub target: OsmNodeId,
    pub attrs:  EdgeAttrs,
}

// ── RoadNetworkGraph trait ────────────────────────────────────────────────────

/// Read-only view of a road multigraph.
///
/// Projection code depends only on this trait, so any acquisition backend
/// that can enumerate its nodes and edges can feed the output stage.
pub trait RoadNetworkGraph {
    /// All nodes in the backend's iteration order.
    fn nodes(&self) -> impl Iterator<Item = (OsmNodeId, &NodeAttrs)>;

    /// All directed edges (parallel edges included) in iteration order.
    fn edges(&self) -> impl Iterator<Item = (OsmNodeId, OsmNodeId, &EdgeAttrs)>;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// In-memory directed multigraph.  Build with [`RoadGraphBuilder`].
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    node_ids:   Vec<OsmNodeId>,
    node_attrs: Vec<NodeAttrs>,
    index:      FxHashMap<OsmNodeId, usize>,
    edges:      Vec<GraphEdge>,
}

impl RoadGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn node(&self, id: OsmNodeId) -> Option<&NodeAttrs> {
        self.index.get(&id).map(|&i| &self.node_attrs[i])
    }

    pub fn contains_node(&self, id: OsmNodeId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn edge_list(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Mutable access to every edge's attributes, for enrichment passes.
    pub fn edge_attrs_mut(&mut self) -> impl Iterator<Item = &mut EdgeAttrs> {
        self.edges.iter_mut().map(|e| &mut e.attrs)
    }

    /// Keep only nodes inside `bbox` (inclusive) and the edges whose both
    /// endpoints survive.  Relative order is preserved.
    pub fn retain_within(&mut self, bbox: &BoundingBox) {
        let keep: Vec<bool> = self
            .node_attrs
            .iter()
            .map(|a| bbox.contains(a.y, a.x))
            .collect();

        let mut kept_ids   = Vec::with_capacity(self.node_ids.len());
        let mut kept_attrs = Vec::with_capacity(self.node_attrs.len());
        for ((id, attrs), keep) in self.node_ids.iter().zip(&self.node_attrs).zip(&keep) {
            if *keep {
                kept_ids.push(*id);
                kept_attrs.push(*attrs);
            }
        }
        self.node_ids = kept_ids;
        self.node_attrs = kept_attrs;
        self.reindex();

        let index = &self.index;
        self.edges
            .retain(|e| index.contains_key(&e.source) && index.contains_key(&e.target));
    }

    /// Drop edges for which `keep` returns `false`.  Nodes are untouched.
    pub fn retain_edges(&mut self, mut keep: impl FnMut(&GraphEdge) -> bool) {
        self.edges.retain(|e| keep(e));
    }

    fn reindex(&mut self) {
        self.index.clear();
        self.index.reserve(self.node_ids.len());
        for (i, id) in self.node_ids.iter().enumerate() {
            self.index.insert(*id, i);
        }
    }
}

impl RoadNetworkGraph for RoadGraph {
    fn nodes(&self) -> impl Iterator<Item = (OsmNodeId, &NodeAttrs)> {
        self.node_ids.iter().copied().zip(self.node_attrs.iter())
    }

    fn edges(&self) -> impl Iterator<Item = (OsmNodeId, OsmNodeId, &EdgeAttrs)> {
        self.edges.iter().map(|e| (e.source, e.target, &e.attrs))
    }

    fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rg_core::{OsmNodeId, OsmWayId};
/// use rg_network::{EdgeAttrs, NodeAttrs, RoadGraphBuilder, RoadNetworkGraph};
///
/// let mut b = RoadGraphBuilder::new();
/// b.add_node(OsmNodeId(1), NodeAttrs { x: -88.04, y: 30.69 });
/// b.add_node(OsmNodeId(2), NodeAttrs { x: -88.03, y: 30.70 });
/// b.add_edge(OsmNodeId(1), OsmNodeId(2), EdgeAttrs::new(OsmWayId(10), 1_200.0)).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct RoadGraphBuilder {
    graph: RoadGraph,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(nodes);
        Self {
            graph: RoadGraph {
                node_ids:   Vec::with_capacity(nodes),
                node_attrs: Vec::with_capacity(nodes),
                index,
                edges:      Vec::with_capacity(edges),
            },
        }
    }

    /// Add a node.  Returns `false` (and leaves the existing position in
    /// place) if `id` was already added.
    pub fn add_node(&mut self, id: OsmNodeId, attrs: NodeAttrs) -> bool {
        if self.graph.index.contains_key(&id) {
            return false;
        }
        self.graph.index.insert(id, self.graph.node_ids.len());
        self.graph.node_ids.push(id);
        self.graph.node_attrs.push(attrs);
        true
    }

    /// Add a **directed** edge.  Both endpoints must already be present.
    pub fn add_edge(
        &mut self,
        source: OsmNodeId,
        target: OsmNodeId,
        attrs:  EdgeAttrs,
    ) -> NetworkResult<()> {
        for id in [source, target] {
            if !self.graph.contains_node(id) {
                return Err(NetworkError::UnknownNode(id));
            }
        }
        self.graph.edges.push(GraphEdge { source, target, attrs });
        Ok(())
    }

    pub fn node(&self, id: OsmNodeId) -> Option<&NodeAttrs> {
        self.graph.node(id)
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }
    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    pub fn build(self) -> RoadGraph {
        self.graph
    }
}
