//! Geographic coordinate type and spatial utilities.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Values are carried through
//! unchanged: there is no datum handling and no range clamping.  Callers that
//! want garbage rejected up front use [`Coordinate::validate`].

use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// A WGS-84 `(lat, lon)` pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Strict-mode check: both components finite, latitude within
    /// [-90, 90], longitude within [-180, 180].
    pub fn validate(self) -> CoreResult<Self> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(CoreError::InvalidCoordinate(self, "non-finite component"));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoreError::InvalidCoordinate(self, "latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoreError::InvalidCoordinate(self, "longitude outside [-180, 180]"));
        }
        Ok(self)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        const R: f64 = 6_371_009.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Clamp guards against a > 1 from rounding on antipodal points.
        let c = 2.0 * a.min(1.0).sqrt().asin();
        R * c
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parse `"lat,lon"` (whitespace around either number is ignored).
impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("expected \"lat,lon\", got {s:?}")))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| CoreError::Parse(format!("latitude {lat:?}: {e}")))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|e| CoreError::Parse(format!("longitude {lon:?}: {e}")))?;
        Ok(Coordinate::new(lat, lon))
    }
}
