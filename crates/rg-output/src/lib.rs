//! `rg-output` — the write-once output artifact and its persistence.
//!
//! Two backends are provided:
//!
//! | Sink        | Files created                                             |
//! |-------------|-----------------------------------------------------------|
//! | `JsonSink`  | `<dir>/<destination>` — one `{nodes, edges}` object       |
//! | `CsvSink`   | `<dir>/<destination>/nodes.csv`, `.../edges.csv`          |
//!
//! Both implement [`GraphSink`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{GraphSink, JsonSink};
//!
//! let mut sink = JsonSink::new(Path::new("./output"))?;
//! let path = sink.write(&serialized, "graph.json")?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod record;
pub mod sink;


pub use crate::csv::CsvSink;
pub use error::{OutputError, OutputResult};
pub use json::JsonSink;
pub use record::{EdgeRecord, NodeRecord, SerializedGraph};
pub use sink::GraphSink;
