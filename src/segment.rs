//! The phonetic segment: a bundle of tri-state features.
//!
//! A [`Segment`] stores one [`FeatureValue`] per feature name in a single map,
//! so a name can never sit in two states at once. The `positive`, `negative`
//! and `zero` lists callers see are views filtered from that map.
//!
//! # Invariants
//!
//! - A feature name holds at most one state at any time. Assigning a state
//!   replaces whatever state the name held before.
//! - Re-assigning the state a feature already holds is a no-op.
//! - Each view lists names in the order they entered that state. Consumers
//!   should compare by membership; the order exists for reproducible output.
//! - [`Segment::combine`] never mutates its inputs and shares no storage
//!   with them.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::error::{Result, SegmentError};
use crate::feature::FeatureValue;

// ─── Feature entry ──────────────────────────────────────────────────────────

/// Stored state for one feature name.
#[derive(Clone, Copy, Debug)]
struct FeatureEntry {
    value: FeatureValue,
    /// Stamp taken when the feature entered `value`; orders the views.
    since: u64,
}

// ─── Segment ────────────────────────────────────────────────────────────────

/// One phonetic unit's feature bundle.
///
/// ```rust
/// use phonoseg_core::{Conditions, Segment};
///
/// let mut b = Segment::new(["voice", "labial"], ["nasal"], ["long"]);
/// assert!(b.meets_conditions(&Conditions::new().positive(["voice"]).negative(["nasal"])));
///
/// b.set_positive("nasal");
/// assert_eq!(b.positive(), ["voice", "labial", "nasal"]);
/// assert!(b.negative().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct Segment {
    features: HashMap<String, FeatureEntry>,
    next_stamp: u64,
}

impl Segment {
    /// Build a segment from explicit positive, negative and zero lists.
    ///
    /// Names are applied positive first, then negative, then zero. A name
    /// that appears in more than one list therefore ends in the last list
    /// that mentions it. Use [`Segment::try_new`] to reject such input.
    pub fn new<P, N, Z>(positive: P, negative: N, zero: Z) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        Z: IntoIterator,
        Z::Item: AsRef<str>,
    {
        let mut segment = Segment::empty();
        for name in positive {
            segment.set_positive(name.as_ref());
        }
        for name in negative {
            segment.set_negative(name.as_ref());
        }
        for name in zero {
            segment.set_zero(name.as_ref());
        }
        segment
    }

    /// Strict form of [`Segment::new`]: fails if any name is listed under two
    /// different states. Repeating a name within one list is allowed.
    pub fn try_new<P, N, Z>(positive: P, negative: N, zero: Z) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        Z: IntoIterator,
        Z::Item: AsRef<str>,
    {
        let mut segment = Segment::empty();
        segment.extend_strict(positive, FeatureValue::Positive)?;
        segment.extend_strict(negative, FeatureValue::Negative)?;
        segment.extend_strict(zero, FeatureValue::Zero)?;
        Ok(segment)
    }

    /// A segment with no specified features.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a segment from typed (name, value) pairs. Later pairs win.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, FeatureValue)>,
        S: AsRef<str>,
    {
        let mut segment = Segment::empty();
        for (name, value) in values {
            segment.set(name.as_ref(), value);
        }
        segment
    }

    fn extend_strict<I>(&mut self, names: I, value: FeatureValue) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            match self.state(name) {
                Some(first) if first != value => {
                    tracing::debug!(feature = name, %first, second = %value, "conflicting feature in triple");
                    return Err(SegmentError::ConflictingFeature {
                        feature: name.to_owned(),
                        first,
                        second: value,
                    });
                }
                _ => self.set(name, value),
            }
        }
        Ok(())
    }

    // ── Assignment ─────────────────────────────────────────────────────────

    /// Assert `feature` present, clearing any negative or zero state.
    pub fn set_positive(&mut self, feature: &str) {
        self.set(feature, FeatureValue::Positive);
    }

    /// Assert `feature` absent, clearing any positive or zero state.
    pub fn set_negative(&mut self, feature: &str) {
        self.set(feature, FeatureValue::Negative);
    }

    /// Assert `feature` neutral, clearing any positive or negative state.
    pub fn set_zero(&mut self, feature: &str) {
        self.set(feature, FeatureValue::Zero);
    }

    /// Assign `value` to `feature`.
    ///
    /// A feature that changes state moves to the end of its new view. A
    /// feature that already holds `value` is left where it is.
    pub fn set(&mut self, feature: &str, value: FeatureValue) {
        if self.state(feature) == Some(value) {
            return;
        }
        let since = self.next_stamp;
        self.next_stamp += 1;
        tracing::trace!(feature, %value, "feature assigned");
        self.features
            .insert(feature.to_owned(), FeatureEntry { value, since });
    }

    // ── Read accessors ─────────────────────────────────────────────────────

    /// State of `feature`, or `None` if the segment does not specify it.
    pub fn state(&self, feature: &str) -> Option<FeatureValue> {
        self.features.get(feature).map(|e| e.value)
    }

    /// `true` if `feature` is positive.
    pub fn is_positive(&self, feature: &str) -> bool {
        self.state(feature) == Some(FeatureValue::Positive)
    }

    /// `true` if `feature` is negative.
    pub fn is_negative(&self, feature: &str) -> bool {
        self.state(feature) == Some(FeatureValue::Negative)
    }

    /// `true` if `feature` is explicitly zero.
    pub fn is_zero(&self, feature: &str) -> bool {
        self.state(feature) == Some(FeatureValue::Zero)
    }

    /// `true` if `feature` holds any of the three states.
    pub fn is_specified(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    /// Features asserted present, in the order they became positive.
    pub fn positive(&self) -> Vec<&str> {
        self.features_with(FeatureValue::Positive)
    }

    /// Features asserted absent, in the order they became negative.
    pub fn negative(&self) -> Vec<&str> {
        self.features_with(FeatureValue::Negative)
    }

    /// Features asserted neutral, in the order they became zero.
    pub fn zero(&self) -> Vec<&str> {
        self.features_with(FeatureValue::Zero)
    }

    /// Features holding `value`, in the order they entered that state.
    pub fn features_with(&self, value: FeatureValue) -> Vec<&str> {
        let mut names: Vec<(u64, &str)> = self
            .features
            .iter()
            .filter(|(_, e)| e.value == value)
            .map(|(name, e)| (e.since, name.as_str()))
            .collect();
        names.sort_unstable_by_key(|&(since, _)| since);
        names.into_iter().map(|(_, name)| name).collect()
    }

    /// All specified features with their state, in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        let mut entries: Vec<(&str, &FeatureEntry)> = self
            .features
            .iter()
            .map(|(name, e)| (name.as_str(), e))
            .collect();
        entries.sort_unstable_by_key(|(_, e)| e.since);
        entries.into_iter().map(|(name, e)| (name, e.value))
    }

    /// Number of specified features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// `true` if no feature is specified.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    // ── Merge ──────────────────────────────────────────────────────────────

    /// Overlay `overlay` onto a copy of `self`.
    ///
    /// Every feature `overlay` specifies takes the overlay's state, applied
    /// positive, then negative, then zero. Features the overlay leaves
    /// unspecified keep the state they have in `self`.
    pub fn combine(&self, overlay: &Segment) -> Segment {
        let mut merged = self.clone();
        for value in FeatureValue::ALL {
            for name in overlay.features_with(value) {
                merged.set(name, value);
            }
        }
        tracing::trace!(
            base = self.len(),
            overlay = overlay.len(),
            merged = merged.len(),
            "segments combined"
        );
        merged
    }
}

impl PartialEq for Segment {
    /// Segments are equal when they specify the same features with the same
    /// states. View order is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.features.len() == other.features.len()
            && self
                .features
                .iter()
                .all(|(name, e)| other.state(name) == Some(e.value))
    }
}

impl Eq for Segment {}

impl<S: AsRef<str>> FromIterator<(S, FeatureValue)> for Segment {
    fn from_iter<I: IntoIterator<Item = (S, FeatureValue)>>(iter: I) -> Self {
        Segment::from_values(iter)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Segment> Positive: {:?}, Negative: {:?}, Zero: {:?}",
            self.positive(),
            self.negative(),
            self.zero()
        )
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("positive", &self.positive())
            .field("negative", &self.negative())
            .field("zero", &self.zero())
            .finish()
    }
}

/// Copy a view into owned names.
#[cfg(any(feature = "serde", feature = "python-ffi", test))]
pub(crate) fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(|n| n.to_owned()).collect()
}
