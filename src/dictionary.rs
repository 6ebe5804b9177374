//! Building segments from flat feature dictionaries.
//!
//! A feature dictionary maps each feature name to one of the symbols `+`,
//! `-` or `0`. Feature tables usually carry a label column as well (the IPA
//! symbol of the segment); keys listed in [`DictionaryConfig::reserved_keys`]
//! are skipped whatever their value.
//!
//! Validation happens here, at the boundary: the first entry whose symbol is
//! not one of the three yields [`SegmentError::InvalidSymbol`] and no segment
//! is produced.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Result, SegmentError};
use crate::feature::FeatureValue;
use crate::segment::Segment;

/// Reserved key holding a segment's IPA label.
pub const IPA_KEY: &str = "IPA";

/// Options for reading feature dictionaries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DictionaryConfig {
    /// Keys that are not features and are skipped. Default: `["IPA"]`.
    pub reserved_keys: Vec<String>,
}

impl DictionaryConfig {
    /// `true` if `key` is skipped rather than read as a feature.
    pub fn is_reserved(&self, key: &str) -> bool {
        self.reserved_keys.iter().any(|k| k == key)
    }
}

/// A dictionary value as handed over by a dynamically typed caller.
///
/// Feature tables loaded from scripting languages or loose formats may hold
/// values that are not text at all (`None`, integers). Those are never a
/// valid symbol, but a reserved key is still skipped whatever it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawSymbol {
    /// A textual value, checked against `+`, `-` and `0`.
    Text(String),
    /// A non-textual value, carried as its printed form for error reporting.
    NonText(String),
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            reserved_keys: vec![IPA_KEY.to_string()],
        }
    }
}

impl Segment {
    /// Build a segment from (feature, symbol) entries, skipping `IPA`.
    ///
    /// ```rust
    /// use phonoseg_core::Segment;
    ///
    /// let s = Segment::from_dictionary([("IPA", "m"), ("voice", "+"), ("nasal", "+"), ("long", "0")])?;
    /// assert_eq!(s.positive(), ["voice", "nasal"]);
    /// assert_eq!(s.zero(), ["long"]);
    /// # Ok::<(), phonoseg_core::SegmentError>(())
    /// ```
    pub fn from_dictionary<I, K, V>(entries: I) -> Result<Segment>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Segment::from_dictionary_with(&DictionaryConfig::default(), entries)
    }

    /// Build a segment from (feature, symbol) entries under `config`.
    pub fn from_dictionary_with<I, K, V>(config: &DictionaryConfig, entries: I) -> Result<Segment>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Segment::from_raw_dictionary_with(
            config,
            entries
                .into_iter()
                .map(|(key, symbol)| (key, RawSymbol::Text(symbol.as_ref().to_string()))),
        )
    }

    /// Build a segment from (feature, [`RawSymbol`]) entries under `config`.
    ///
    /// Reserved keys are skipped before their value is looked at. Any other
    /// entry holding [`RawSymbol::NonText`] is an invalid symbol.
    pub fn from_raw_dictionary_with<I, K>(config: &DictionaryConfig, entries: I) -> Result<Segment>
    where
        I: IntoIterator<Item = (K, RawSymbol)>,
        K: AsRef<str>,
    {
        let mut segment = Segment::empty();
        for (key, symbol) in entries {
            let key = key.as_ref();
            if config.is_reserved(key) {
                tracing::trace!(key, "skipping reserved dictionary key");
                continue;
            }
            let value = match &symbol {
                RawSymbol::Text(text) => FeatureValue::from_symbol(text),
                RawSymbol::NonText(_) => None,
            };
            let value = value.ok_or_else(|| {
                let (RawSymbol::Text(shown) | RawSymbol::NonText(shown)) = symbol;
                tracing::debug!(feature = key, symbol = %shown, "rejecting feature dictionary entry");
                SegmentError::InvalidSymbol {
                    feature: key.to_string(),
                    symbol: shown,
                }
            })?;
            segment.set(key, value);
        }
        Ok(segment)
    }
}
