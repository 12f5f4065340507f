//! Strongly typed identifier wrappers for OpenStreetMap elements.
//!
//! OSM ids are signed 64-bit integers (negative ids appear in unsaved edits
//! and some extracts).  They are opaque to this crate: nothing indexes by
//! them, they are only compared, hashed, and written out.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// OSM node id.  Serialized as a bare integer.
    pub struct OsmNodeId(i64);
}

typed_id! {
    /// OSM way id.  Every road-graph edge remembers the way it came from.
    pub struct OsmWayId(i64);
}
