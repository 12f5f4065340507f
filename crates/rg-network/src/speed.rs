//! Edge speed and travel-time enrichment.
//!
//! # Speed sources, in priority order
//!
//! 1. A `speed_kph` already set by the acquisition backend.
//! 2. The edge's own `maxspeed` tag, if it parses.
//! 3. The mean parsed speed of all edges sharing the same `highway` class.
//! 4. A per-class default (see [`default_speed_kph`]).
//! 5. The mean of every known speed in the graph.
//!
//! If all five come up empty the edge keeps `speed_kph = None`, and
//! [`add_edge_travel_times`] leaves its `travel_time` absent.  Missing
//! enrichment never fails the extraction.

use log::debug;
use rustc_hash::FxHashMap;

use crate::graph::RoadGraph;

const MPH_TO_KPH: f64 = 1.609_344;

/// Counters reported by [`add_edge_speeds`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeedStats {
    /// Edges whose speed came from the backend or their own `maxspeed`.
    pub tagged:  usize,
    /// Edges whose speed was imputed from class means or defaults.
    pub imputed: usize,
    /// Edges left without a speed.
    pub missing: usize,
}

// ── maxspeed parsing ──────────────────────────────────────────────────────────

/// Parse a raw `maxspeed=*` value into km/h.
///
/// Accepts bare numbers (km/h), `"<n> mph"`, `"<n> km/h"`, and lists
/// separated by `;` or `|`, which are averaged.  Symbolic values such as
/// `"signals"` or `"none"` yield `None`, as does any list with an
/// unparseable member.
pub fn parse_maxspeed(raw: &str) -> Option<f64> {
    let values = raw
        .split([';', '|'])
        .map(parse_single_speed)
        .collect::<Option<Vec<f64>>>()?;
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn parse_single_speed(raw: &str) -> Option<f64> {
    let lower = raw.trim().to_ascii_lowercase();
    let (number, factor) = if let Some(n) = lower.strip_suffix("mph") {
        (n.trim(), MPH_TO_KPH)
    } else if let Some(n) = ["km/h", "kmh", "kph"]
        .iter()
        .find_map(|unit| lower.strip_suffix(unit))
    {
        (n.trim(), 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let value: f64 = number.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value * factor)
}

/// Fallback free-flow speed (km/h) for a road class with no tagged edges.
///
/// Conservative urban values; `None` for classes with no sensible default,
/// which then fall through to the graph-wide mean.
pub fn default_speed_kph(highway: &str) -> Option<f64> {
    match highway {
        "motorway" | "motorway_link"          => Some(105.0), // ~65 mph
        "trunk"    | "trunk_link"             => Some(89.0),  // ~55 mph
        "primary"  | "primary_link"           => Some(72.0),  // ~45 mph
        "secondary"| "secondary_link"         => Some(64.0),  // ~40 mph
        "tertiary" | "tertiary_link"          => Some(48.0),  // ~30 mph
        "residential" | "living_street"       => Some(32.0),  // ~20 mph
        "service"  | "unclassified"           => Some(24.0),  // ~15 mph
        _                                     => None,
    }
}

// ── Enrichment passes ─────────────────────────────────────────────────────────

/// Fill `speed_kph` on every edge that can be given one.
pub fn add_edge_speeds(graph: &mut RoadGraph) -> SpeedStats {
    let mut stats = SpeedStats::default();

    // Pass 1: own speed, and per-class accumulation of known speeds.
    let mut by_class: FxHashMap<String, (f64, usize)> = FxHashMap::default();
    let mut all = (0.0_f64, 0usize);

    for attrs in graph.edge_attrs_mut() {
        if attrs.speed_kph.is_none() {
            attrs.speed_kph = attrs.maxspeed.as_deref().and_then(parse_maxspeed);
        }
        let Some(kph) = attrs.speed_kph else { continue };
        stats.tagged += 1;
        all.0 += kph;
        all.1 += 1;
        if let Some(class) = &attrs.highway {
            let slot = by_class.entry(class.clone()).or_insert((0.0, 0));
            slot.0 += kph;
            slot.1 += 1;
        }
    }

    let global_mean = (all.1 > 0).then(|| all.0 / all.1 as f64);

    // Pass 2: impute the rest.
    for attrs in graph.edge_attrs_mut() {
        if attrs.speed_kph.is_some() {
            continue;
        }
        let class_speed = attrs.highway.as_deref().and_then(|class| {
            by_class
                .get(class)
                .map(|&(sum, n)| sum / n as f64)
                .or_else(|| default_speed_kph(class))
        });
        attrs.speed_kph = class_speed.or(global_mean);
        if attrs.speed_kph.is_some() {
            stats.imputed += 1;
        } else {
            stats.missing += 1;
        }
    }

    debug!(
        "edge speeds: {} tagged, {} imputed, {} missing ({} classes with tagged speeds)",
        stats.tagged, stats.imputed, stats.missing, by_class.len()
    );
    stats
}

/// Fill `travel_time` (seconds) as `length / speed` on every edge with a
/// positive speed and a finite, non-negative length.  Returns the number of
/// edges left without a travel time.
pub fn add_edge_travel_times(graph: &mut RoadGraph) -> usize {
    let mut gaps = 0;
    for attrs in graph.edge_attrs_mut() {
        attrs.travel_time = match attrs.speed_kph {
            Some(kph) if kph > 0.0 && attrs.length.is_finite() && attrs.length >= 0.0 => {
                Some(attrs.length / (kph / 3.6))
            }
            _ => None,
        };
        if attrs.travel_time.is_none() {
            gaps += 1;
        }
    }
    if gaps > 0 {
        debug!("{gaps} edges left without a travel time");
    }
    gaps
}
