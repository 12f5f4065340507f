//! JSON output backend.
//!
//! Writes the whole graph as a single object:
//!
//! ```text
//! {"nodes":[{"id":…,"lat":…,"lon":…},…],"edges":[{"source":…,"target":…,"distance":…,"travel_time":…|null},…]}
//! ```

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::sink::{check_destination, GraphSink};
use crate::{OutputResult, SerializedGraph};

/// Writes each graph to `<dir>/<destination>` as JSON.
///
/// The file is written under a temporary name in the same directory and
/// renamed into place, so readers never see a half-written graph.
pub struct JsonSink {
    dir:    PathBuf,
    pretty: bool,
}

impl JsonSink {
    /// Create `dir` (and parents) if missing.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { dir: dir.to_path_buf(), pretty: false })
    }

    /// Indent the output.  Off by default; large regions produce files in the
    /// hundreds of megabytes.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl GraphSink for JsonSink {
    fn write(&mut self, graph: &SerializedGraph, destination: &str) -> OutputResult<PathBuf> {
        check_destination(destination)?;
        let path = self.dir.join(destination);

        let parent = path.parent().unwrap_or(&self.dir);
        let mut tmp = NamedTempFile::new_in(parent)?;
        {
            let mut out = BufWriter::new(&mut tmp);
            if self.pretty {
                serde_json::to_writer_pretty(&mut out, graph)?;
            } else {
                serde_json::to_writer(&mut out, graph)?;
            }
            out.flush()?;
        }
        // Dropping the failed `PersistError` removes the temporary file.
        tmp.persist(&path).map_err(|e| e.error)?;

        info!(
            "wrote {} ({} nodes, {} edges)",
            path.display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(path)
    }
}
