//! Serialisable segment record.
//!
//! A [`Segment`] serialises as its three views:
//!
//! ```json
//! { "positive": ["voice"], "negative": ["nasal"], "zero": ["long"] }
//! ```
//!
//! Missing lists deserialise as empty. A record that lists a name under more
//! than one state is resolved the same way as [`Segment::new`]: the last list
//! mentioning the name wins. Records do not preserve the internal assignment
//! stamps; view order is carried by list order.
//!
//! Requires the `serde` feature.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::segment::{owned_names, Segment};

/// The three views of a segment, as plain lists.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SegmentRecord {
    /// Features asserted present.
    pub positive: Vec<String>,
    /// Features asserted absent.
    pub negative: Vec<String>,
    /// Features asserted neutral.
    pub zero: Vec<String>,
}

impl From<&Segment> for SegmentRecord {
    fn from(s: &Segment) -> Self {
        Self {
            positive: owned_names(s.positive()),
            negative: owned_names(s.negative()),
            zero: owned_names(s.zero()),
        }
    }
}

impl From<SegmentRecord> for Segment {
    fn from(r: SegmentRecord) -> Self {
        Segment::new(r.positive, r.negative, r.zero)
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SegmentRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SegmentRecord::deserialize(deserializer).map(Segment::from)
    }
}
