//! Pipeline configuration.
//!
//! # TOML format
//!
//! Every key is optional; the defaults extract the drivable network of
//! Florida to `./graph.json`.  Without `destination`, CSV output goes to the
//! directory `./graph/`.
//!
//! ```toml
//! network     = "drive"          # or "drive_service"
//! pbf         = "florida-latest.osm.pbf"
//! output_dir  = "output"
//! destination = "THEGRAPH.json"
//! format      = "json"           # or "csv"
//! pretty      = false
//! strict      = false
//!
//! # Either two corners in any order …
//! [region.corners]
//! a = { lat = 31.0, lon = -88.0 }
//! b = { lat = 24.0, lon = -77.0 }
//!
//! # … or explicit bounds.
//! # [region.bbox]
//! # west = -88.0
//! # south = 24.0
//! # east = -77.0
//! # north = 31.0
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rg_core::{build_bbox, BoundingBox, Coordinate, CoreResult};
use rg_network::NetworkType;
use rg_output::{CsvSink, GraphSink, JsonSink};

use crate::{PipelineError, PipelineResult};

// ── Region ────────────────────────────────────────────────────────────────────

/// The area to extract.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Two opposite corners, in any order.
    Corners { a: Coordinate, b: Coordinate },
    /// Explicit bounds.
    Bbox(BoundingBox),
}

impl Region {
    /// Canonical box for this region.  Explicit bounds are re-normalised
    /// so a swapped west/east pair still yields `west <= east`.
    pub fn bbox(&self) -> BoundingBox {
        let (a, b) = self.corners();
        build_bbox(a, b)
    }

    /// Like [`bbox`](Self::bbox) but fails on non-finite or out-of-range
    /// corners and on zero-area boxes.
    pub fn bbox_strict(&self) -> CoreResult<BoundingBox> {
        let (a, b) = self.corners();
        build_bbox(a.validate()?, b.validate()?).validate_strict()
    }

    fn corners(&self) -> (Coordinate, Coordinate) {
        match *self {
            Region::Corners { a, b } => (a, b),
            Region::Bbox(bb) => (
                Coordinate::new(bb.south, bb.west),
                Coordinate::new(bb.north, bb.east),
            ),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Bbox(BoundingBox::FLORIDA)
    }
}

// ── OutputFormat ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv  => "csv",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> PipelineResult<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv"  => Ok(OutputFormat::Csv),
            other  => Err(PipelineError::Config(format!("unknown output format {other:?}"))),
        }
    }
}

impl OutputFormat {
    /// Name used when no destination is configured.
    pub fn default_destination(self) -> &'static str {
        match self {
            OutputFormat::Json => "graph.json",
            OutputFormat::Csv  => "graph",
        }
    }
}

// ── PipelineConfig ────────────────────────────────────────────────────────────

/// Everything one extraction run needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub region:      Region,
    pub network:     NetworkType,
    /// Local OSM extract read by the PBF provider.
    pub pbf:         Option<PathBuf>,
    pub output_dir:  PathBuf,
    /// Output name inside `output_dir`; see [`PipelineConfig::destination`].
    pub destination: Option<String>,
    pub format:      OutputFormat,
    /// Indent JSON output.
    pub pretty:      bool,
    /// Reject out-of-range coordinates and zero-area boxes before fetching.
    pub strict:      bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            region:      Region::default(),
            network:     NetworkType::Drive,
            pbf:         None,
            output_dir:  PathBuf::from("."),
            destination: None,
            format:      OutputFormat::Json,
            pretty:      false,
            strict:      false,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(text: &str) -> PipelineResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: &Path) -> PipelineResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Configured destination, or `graph.json` / `graph` (a directory of
    /// CSV files) depending on `format`.
    pub fn destination(&self) -> &str {
        self.destination
            .as_deref()
            .unwrap_or_else(|| self.format.default_destination())
    }

    /// The box to extract, validated when `strict` is set.
    pub fn bbox(&self) -> PipelineResult<BoundingBox> {
        if self.strict {
            Ok(self.region.bbox_strict()?)
        } else {
            Ok(self.region.bbox())
        }
    }

    /// Open the sink selected by `format` in `output_dir`.
    pub fn sink(&self) -> PipelineResult<Box<dyn GraphSink>> {
        Ok(match self.format {
            OutputFormat::Json => Box::new(JsonSink::new(&self.output_dir)?.pretty(self.pretty)),
            OutputFormat::Csv  => Box::new(CsvSink::new(&self.output_dir)?),
        })
    }

    /// PBF provider for the configured extract.
    #[cfg(feature = "osm")]
    pub fn provider(&self) -> PipelineResult<rg_network::OsmPbfProvider> {
        let path = self
            .pbf
            .as_ref()
            .ok_or_else(|| PipelineError::Config("no OSM extract (pbf) configured".into()))?;
        if !path.is_file() {
            return Err(PipelineError::Config(format!("OSM extract {} not found", path.display())));
        }
        Ok(rg_network::OsmPbfProvider::new(path))
    }
}
