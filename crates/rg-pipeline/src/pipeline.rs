//! Pipeline stages and the one-shot [`run`] driver.

use std::path::PathBuf;

use log::{info, warn};

use rg_core::BoundingBox;
use rg_network::{GraphProvider, NetworkType, RoadNetworkGraph};
use rg_output::{GraphSink, SerializedGraph};

use crate::config::PipelineConfig;
use crate::projector::project;
use crate::PipelineResult;

/// Fetch the `network` graph inside `bbox`, enrich its edges, and project it
/// to records.
///
/// Acquisition failures propagate unchanged.  Edges the provider could not
/// give a travel time are still emitted, with `travel_time = None`.
pub fn extract_and_project<P>(
    provider: &P,
    bbox:     BoundingBox,
    network:  NetworkType,
) -> PipelineResult<SerializedGraph>
where
    P: GraphProvider + ?Sized,
{
    info!("fetching {network} network for {bbox}");
    let mut graph = provider.fetch(bbox, network)?;
    provider.enrich(&mut graph);

    let serialized = project(&graph);
    debug_assert_eq!(serialized.node_count(), graph.node_count());
    debug_assert_eq!(serialized.edge_count(), graph.edge_count());

    let gaps = serialized.travel_time_gaps();
    if gaps > 0 {
        warn!("{gaps} of {} edges have no travel time", serialized.edge_count());
    }
    Ok(serialized)
}

/// Hand the finished graph to `sink` under `destination`.
pub fn persist<S>(
    serialized:  &SerializedGraph,
    sink:        &mut S,
    destination: &str,
) -> PipelineResult<PathBuf>
where
    S: GraphSink + ?Sized,
{
    Ok(sink.write(serialized, destination)?)
}

/// Run the whole pipeline once: region → bbox → graph → records → sink.
///
/// Returns the location reported by the sink.
pub fn run<P, S>(config: &PipelineConfig, provider: &P, sink: &mut S) -> PipelineResult<PathBuf>
where
    P: GraphProvider + ?Sized,
    S: GraphSink + ?Sized,
{
    let bbox = config.bbox()?;
    if bbox.is_degenerate() {
        warn!("bounding box {bbox} has zero area");
    }
    let serialized = extract_and_project(provider, bbox, config.network)?;
    persist(&serialized, sink, config.destination())
}
