//! Input validation errors.
//!
//! Nothing in this crate raises these on its own: `build_bbox` accepts any
//! pair of floats.  They come from the opt-in strict checks and from parsing
//! user-supplied coordinate strings.

use thiserror::Error;

use crate::{BoundingBox, Coordinate};

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate {0}: {1}")]
    InvalidCoordinate(Coordinate, &'static str),

    #[error("degenerate bounding box {0}")]
    DegenerateBox(BoundingBox),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
