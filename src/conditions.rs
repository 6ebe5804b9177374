//! Partial feature specifications and the `meets_conditions` predicate.
//!
//! A [`Conditions`] value lists the features a segment must hold as positive,
//! negative and zero. Matching is a conjunction: every listed feature must be
//! in the listed state. Features the conditions do not mention are ignored,
//! whether or not the segment specifies them.
//!
//! ```rust
//! use phonoseg_core::{Conditions, Segment};
//!
//! let b = Segment::new(["voice"], ["nasal"], ["long"]);
//! assert!(b.meets_conditions(&Conditions::new()));
//! assert!(b.meets_conditions(&Conditions::new().positive(["voice"]).negative(["nasal"])));
//! assert!(!b.meets_conditions(&Conditions::new().positive(["nasal"])));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::feature::FeatureValue;
use crate::segment::Segment;

/// Required feature states. An empty list places no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Conditions {
    /// Features that must be positive.
    pub positive: Vec<String>,
    /// Features that must be negative.
    pub negative: Vec<String>,
    /// Features that must be zero.
    pub zero: Vec<String>,
}

impl Conditions {
    /// Conditions with no constraints; every segment meets them.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add features that must be positive.
    pub fn positive<I>(mut self, features: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.positive.extend(features.into_iter().map(Into::into));
        self
    }

    /// Add features that must be negative.
    pub fn negative<I>(mut self, features: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.negative.extend(features.into_iter().map(Into::into));
        self
    }

    /// Add features that must be zero.
    pub fn zero<I>(mut self, features: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.zero.extend(features.into_iter().map(Into::into));
        self
    }

    /// `true` if no feature is constrained.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty() && self.zero.is_empty()
    }

    /// Constrained features paired with their required state, positive first.
    pub fn requirements(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        let pos = self.positive.iter().map(|f| (f.as_str(), FeatureValue::Positive));
        let neg = self.negative.iter().map(|f| (f.as_str(), FeatureValue::Negative));
        let zero = self.zero.iter().map(|f| (f.as_str(), FeatureValue::Zero));
        pos.chain(neg).chain(zero)
    }
}

impl Segment {
    /// `true` if every feature in `conditions` holds its required state.
    ///
    /// Stops at the first failing requirement, checking positive, then
    /// negative, then zero.
    pub fn meets_conditions(&self, conditions: &Conditions) -> bool {
        conditions
            .requirements()
            .all(|(feature, required)| self.state(feature) == Some(required))
    }
}
