//! Way → segment expansion shared by the OSM readers.
//!
//! Kept free of any file format: the PBF provider fills an [`OsmWay`] list
//! and a position map, [`build_graph`] turns them into a [`RoadGraph`].

use rustc_hash::FxHashMap;

use rg_core::{BoundingBox, Coordinate, OsmNodeId, OsmWayId};

use crate::filter::{NetworkType, WayDirection};
use crate::graph::{EdgeAttrs, NodeAttrs, RoadGraph, RoadGraphBuilder};
use crate::{NetworkError, NetworkResult};

/// An admitted way with the tags the graph keeps.
#[derive(Clone, Debug)]
pub(crate) struct OsmWay {
    pub id:        OsmWayId,
    pub refs:      Vec<i64>,
    pub highway:   Option<String>,
    pub maxspeed:  Option<String>,
    pub direction: WayDirection,
}

impl OsmWay {
    pub fn new(id: i64, refs: Vec<i64>, tags: &[(&str, &str)]) -> Self {
        let tag = |key: &str| {
            tags.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_owned())
        };
        Self {
            id: OsmWayId(id),
            refs,
            highway: tag("highway"),
            maxspeed: tag("maxspeed"),
            direction: WayDirection::from_tags(tags),
        }
    }

    fn edge_attrs(&self, length: f64) -> EdgeAttrs {
        EdgeAttrs {
            way:         self.id,
            length,
            highway:     self.highway.clone(),
            maxspeed:    self.maxspeed.clone(),
            oneway:      self.direction.is_oneway(),
            speed_kph:   None,
            travel_time: None,
        }
    }
}

/// Expand `ways` into directed edges between consecutive way nodes.
///
/// A segment is kept only if both ends appear in `positions` (the in-box
/// nodes).  Nodes are added in first-seen order; edge length is the
/// haversine distance in metres.
///
/// # Errors
///
/// [`NetworkError::EmptyRegion`] (tagged with `bbox` and `network`) if no
/// segment survives.
pub(crate) fn build_graph(
    positions: &FxHashMap<i64, Coordinate>,
    ways:      &[OsmWay],
    bbox:      BoundingBox,
    network:   NetworkType,
) -> NetworkResult<RoadGraph> {
    let mut builder = RoadGraphBuilder::with_capacity(positions.len(), positions.len() * 2);

    for way in ways {
        for pair in way.refs.windows(2) {
            let (Some(&a), Some(&b)) = (positions.get(&pair[0]), positions.get(&pair[1])) else {
                continue;
            };
            let (a_id, b_id) = (OsmNodeId(pair[0]), OsmNodeId(pair[1]));
            builder.add_node(a_id, NodeAttrs::from_position(a));
            builder.add_node(b_id, NodeAttrs::from_position(b));

            let attrs = way.edge_attrs(a.distance_m(b));
            match way.direction {
                WayDirection::Forward => builder.add_edge(a_id, b_id, attrs)?,
                WayDirection::Reverse => builder.add_edge(b_id, a_id, attrs)?,
                WayDirection::Both => {
                    builder.add_edge(a_id, b_id, attrs.clone())?;
                    builder.add_edge(b_id, a_id, attrs)?;
                }
            }
        }
    }

    let graph = builder.build();
    if graph.is_empty() {
        return Err(NetworkError::EmptyRegion { bbox, network });
    }
    Ok(graph)
}
