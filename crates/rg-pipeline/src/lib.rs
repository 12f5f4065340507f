//! `rg-pipeline` — the extraction pipeline.
//!
//! Stages run strictly in sequence on the calling thread:
//!
//! ```text
//! Region ──build_bbox──▶ BoundingBox ──GraphProvider::fetch──▶ RoadGraph
//!        ──GraphProvider::enrich──▶ RoadGraph ──project──▶ SerializedGraph
//!        ──GraphSink::write──▶ PathBuf
//! ```
//!
//! Any stage failing aborts the run; nothing is written unless every earlier
//! stage succeeded.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod projector;

#[cfg(test)]
mod tests;

pub use config::{OutputFormat, PipelineConfig, Region};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{extract_and_project, persist, run};
pub use projector::project;
