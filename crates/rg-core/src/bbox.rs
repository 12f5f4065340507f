//! Canonical bounding boxes.
//!
//! Input coordinates arrive as `(lat, lon)`; the box is stored and emitted
//! as `(west, south, east, north)`, i.e. `(lon, lat, lon, lat)`, which is the
//! order map-data extractors expect.

use crate::{Coordinate, CoreError, CoreResult};

/// An axis-aligned `(west, south, east, north)` box in decimal degrees.
///
/// `west <= east` and `south <= north` whenever the box came from
/// [`build_bbox`].  Zero-width and zero-height boxes are legal values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub west:  f64,
    pub south: f64,
    pub east:  f64,
    pub north: f64,
}

impl BoundingBox {
    /// Florida and its surrounding waters; the default extraction region.
    pub const FLORIDA: BoundingBox = BoundingBox {
        west:  -88.0,
        south: 24.0,
        east:  -77.0,
        north: 31.0,
    };

    /// Construct from explicit bounds.  No reordering is applied; use
    /// [`build_bbox`] for arbitrary corner pairs.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.west, self.south, self.east, self.north)
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// `true` when the box has zero (or negative) extent along either axis.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Inclusive point-in-box test.
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }

    /// Strict-mode check: all four corners are valid coordinates and the box
    /// has positive area.
    pub fn validate_strict(self) -> CoreResult<Self> {
        Coordinate::new(self.south, self.west).validate()?;
        Coordinate::new(self.north, self.east).validate()?;
        if self.is_degenerate() {
            return Err(CoreError::DegenerateBox(self));
        }
        Ok(self)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::FLORIDA
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[w={:.6}, s={:.6}, e={:.6}, n={:.6}]",
            self.west, self.south, self.east, self.north
        )
    }
}

/// Build the canonical box spanned by two corners given in any order.
///
/// Each axis is handled independently: low bound = pairwise min, high
/// bound = pairwise max.  `build_bbox(a, b) == build_bbox(b, a)` always
/// holds, and `build_bbox(c, c)` is the zero-area box at `c`.
pub fn build_bbox(a: Coordinate, b: Coordinate) -> BoundingBox {
    BoundingBox {
        west:  a.lon.min(b.lon),
        south: a.lat.min(b.lat),
        east:  a.lon.max(b.lon),
        north: a.lat.max(b.lat),
    }
}
