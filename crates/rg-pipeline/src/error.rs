use std::path::PathBuf;

use rg_core::CoreError;
use rg_network::NetworkError;
use rg_output::OutputError;
use thiserror::Error;

/// Pipeline failure, tagged by the stage that raised it.  The underlying
/// error is carried unmodified.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Input(#[from] CoreError),

    #[error("graph acquisition failed: {0}")]
    Acquisition(#[from] NetworkError),

    #[error("could not persist graph: {0}")]
    Persistence(#[from] OutputError),

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
