//! CSV output backend.
//!
//! Creates a directory `<dir>/<destination>/` holding:
//! - `nodes.csv` — `id,lat,lon`
//! - `edges.csv` — `source,target,distance,travel_time` (empty cell when
//!   the travel time is absent)

use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;

use crate::sink::{check_destination, GraphSink};
use crate::{OutputResult, SerializedGraph};

pub const NODE_HEADERS: [&str; 3] = ["id", "lat", "lon"];
pub const EDGE_HEADERS: [&str; 4] = ["source", "target", "distance", "travel_time"];

/// Writes each graph as a pair of CSV files.
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf() })
    }
}

impl GraphSink for CsvSink {
    fn write(&mut self, graph: &SerializedGraph, destination: &str) -> OutputResult<PathBuf> {
        check_destination(destination)?;
        let out_dir = self.dir.join(destination);
        fs::create_dir_all(&out_dir)?;

        let mut nodes = Writer::from_path(out_dir.join("nodes.csv"))?;
        nodes.write_record(NODE_HEADERS)?;
        for n in &graph.nodes {
            nodes.write_record(&[n.id.0.to_string(), n.lat.to_string(), n.lon.to_string()])?;
        }
        nodes.flush()?;

        let mut edges = Writer::from_path(out_dir.join("edges.csv"))?;
        edges.write_record(EDGE_HEADERS)?;
        for e in &graph.edges {
            edges.write_record(&[
                e.source.0.to_string(),
                e.target.0.to_string(),
                e.distance.to_string(),
                e.travel_time.map(|t| t.to_string()).unwrap_or_default(),
            ])?;
        }
        edges.flush()?;

        info!(
            "wrote {} ({} nodes, {} edges)",
            out_dir.display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(out_dir)
    }
}
