//! Error types for segment construction.
//!
//! Every failure in this crate is an input-validation failure detected while
//! building a [`Segment`](crate::Segment). Once a segment exists, matching and
//! merging are total.

use alloc::string::String;

use thiserror::Error;

use crate::feature::FeatureValue;

/// Errors raised while building segments or parsing feature symbols.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A feature dictionary entry carried a symbol other than `+`, `-` or `0`.
    #[error("invalid symbol {symbol:?} for feature {feature:?}, expected '+', '-' or '0'")]
    InvalidSymbol {
        /// Name of the offending feature.
        feature: String,
        /// The symbol as supplied.
        symbol: String,
    },

    /// A lone symbol could not be parsed as a [`FeatureValue`].
    #[error("unknown feature symbol {symbol:?}, expected '+', '-' or '0'")]
    UnknownSymbol {
        /// The symbol as supplied.
        symbol: String,
    },

    /// A strict triple construction listed the same feature in two states.
    #[error("feature {feature:?} listed as both {first} and {second}")]
    ConflictingFeature {
        /// Name of the feature listed twice.
        feature: String,
        /// State it was listed under first.
        first: FeatureValue,
        /// State it was listed under afterwards.
        second: FeatureValue,
    },
}

/// A specialized `Result` type for segment construction.
pub type Result<T> = core::result::Result<T, SegmentError>;
