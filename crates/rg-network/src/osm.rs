//! OSM PBF acquisition — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use rg_core::BoundingBox;
//! use rg_network::{GraphProvider, NetworkType, OsmPbfProvider};
//!
//! let provider = OsmPbfProvider::new("florida-latest.osm.pbf");
//! let graph = provider.fetch(BoundingBox::FLORIDA, NetworkType::Drive)?;
//! ```
//!
//! # What is loaded
//!
//! Only ways admitted by the requested [`NetworkType`] are kept.  Each pair
//! of consecutive way nodes becomes one directed edge, or two for two-way
//! roads.  Nodes outside the bounding box are dropped together with every
//! segment touching them.
//!
//! # Memory note
//!
//! Only node positions that fall inside the box are buffered, so memory
//! scales with the region rather than with the extract.  Way node lists are
//! buffered in full for admitted ways.

use std::path::{Path, PathBuf};

use log::{debug, info};
use osmpbf::{Element, ElementReader};
use rustc_hash::FxHashMap;

use rg_core::{BoundingBox, Coordinate};

use crate::filter::NetworkType;
use crate::graph::{RoadGraph, RoadNetworkGraph};
use crate::provider::GraphProvider;
use crate::ways::{build_graph, OsmWay};
use crate::NetworkResult;

/// Reads road graphs from a local `.osm.pbf` extract.
#[derive(Clone, Debug)]
pub struct OsmPbfProvider {
    path: PathBuf,
}

impl OsmPbfProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphProvider for OsmPbfProvider {
    /// # Errors
    ///
    /// [`crate::NetworkError::Osm`] on parse errors, [`crate::NetworkError::EmptyRegion`]
    /// if no admitted segment lies fully inside `bbox`.
    fn fetch(&self, bbox: BoundingBox, network: NetworkType) -> NetworkResult<RoadGraph> {
        // ── Phase 1: in-box node positions + admitted ways, one pass ──────
        let reader = ElementReader::from_path(&self.path)?;

        let mut positions: FxHashMap<i64, Coordinate> = FxHashMap::default();
        let mut ways: Vec<OsmWay> = Vec::new();

        reader.for_each(|elem| match elem {
            Element::Node(n) => {
                if bbox.contains(n.lat(), n.lon()) {
                    positions.insert(n.id(), Coordinate::new(n.lat(), n.lon()));
                }
            }
            Element::DenseNode(n) => {
                if bbox.contains(n.lat(), n.lon()) {
                    positions.insert(n.id(), Coordinate::new(n.lat(), n.lon()));
                }
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                if network.admits(&tags) {
                    ways.push(OsmWay::new(w.id(), w.refs().collect(), &tags));
                }
            }
            _ => {}
        })?;

        debug!(
            "{}: {} nodes inside {bbox}, {} admitted {network} ways",
            self.path.display(),
            positions.len(),
            ways.len()
        );

        // ── Phase 2: segments with both ends inside the box ───────────────
        let graph = build_graph(&positions, &ways, bbox, network)?;
        info!(
            "loaded {network} graph for {bbox}: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
