//! Network-usage filters over raw OSM way tags.
//!
//! A way enters the graph only if its tags pass [`NetworkType::admits`].
//! The rules mirror the usual car-routing conventions: a `highway=*` tag is
//! required, non-motorised classes are rejected, and explicit access
//! restrictions for motor vehicles win over the road class.

use std::fmt;
use std::str::FromStr;

use crate::NetworkError;

/// Which slice of the road network to extract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkType {
    /// Public drivable streets, no service roads.
    #[default]
    Drive,
    /// Drivable streets plus service roads (minus parking aisles, driveways
    /// and other private service ways).
    DriveService,
}

/// `highway=*` values that are never drivable.
const NON_DRIVABLE: &[&str] = &[
    "abandoned", "bridleway", "bus_guideway", "construction", "corridor",
    "cycleway", "elevator", "escalator", "footway", "no", "path",
    "pedestrian", "planned", "platform", "proposed", "raceway", "razed",
    "steps", "track",
];

/// `service=*` values excluded even under [`NetworkType::DriveService`].
const PRIVATE_SERVICE: &[&str] = &[
    "alley", "driveway", "emergency_access", "parking", "parking_aisle", "private",
];

impl NetworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Drive        => "drive",
            NetworkType::DriveService => "drive_service",
        }
    }

    /// `true` if a way carrying `tags` belongs to this network.
    pub fn admits(self, tags: &[(&str, &str)]) -> bool {
        let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        if !self.admits_highway(tag("highway")) {
            return false;
        }
        if tag("area") == Some("yes") {
            return false;
        }
        if matches!(tag("motor_vehicle"), Some("no")) || matches!(tag("motorcar"), Some("no")) {
            return false;
        }
        if matches!(tag("access"), Some("private" | "no")) {
            return false;
        }
        if let Some(service) = tag("service") {
            if PRIVATE_SERVICE.contains(&service) {
                return false;
            }
        }
        true
    }

    /// Road-class part of [`admits`](Self::admits): `true` if `highway` is a
    /// class this network carries.  A missing tag is never admitted.
    pub fn admits_highway(self, highway: Option<&str>) -> bool {
        let Some(highway) = highway else {
            return false;
        };
        if NON_DRIVABLE.contains(&highway) {
            return false;
        }
        match self {
            NetworkType::Drive        => highway != "service",
            NetworkType::DriveService => true,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drive"         => Ok(NetworkType::Drive),
            "drive_service" => Ok(NetworkType::DriveService),
            other           => Err(NetworkError::UnknownNetworkType(other.to_owned())),
        }
    }
}

// ── One-way handling ──────────────────────────────────────────────────────────

/// Direction(s) in which a way may be driven, relative to its node order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WayDirection {
    Both,
    Forward,
    Reverse,
}

impl WayDirection {
    /// Derive the driving direction from way tags.
    ///
    /// An explicit `oneway=*` tag wins.  Without one, motorways, motorway
    /// links and roundabouts are implicitly one-way.
    pub fn from_tags(tags: &[(&str, &str)]) -> Self {
        let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        match tag("oneway") {
            Some("yes" | "1" | "true")  => return WayDirection::Forward,
            Some("-1" | "reverse")      => return WayDirection::Reverse,
            Some("no" | "0" | "false")  => return WayDirection::Both,
            _ => {}
        }

        let implicit = matches!(tag("highway"), Some("motorway" | "motorway_link"))
            || matches!(tag("junction"), Some("roundabout" | "circular"));
        if implicit { WayDirection::Forward } else { WayDirection::Both }
    }

    pub fn is_oneway(self) -> bool {
        !matches!(self, WayDirection::Both)
    }
}
