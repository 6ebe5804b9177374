//! Tri-state feature values and their dictionary symbols.
//!
//! | Variant | Symbol | Meaning |
//! |---------|--------|---------|
//! | [`FeatureValue::Positive`] | `+` | feature present |
//! | [`FeatureValue::Negative`] | `-` | feature absent |
//! | [`FeatureValue::Zero`] | `0` | feature explicitly neutral / inapplicable |
//!
//! A feature missing from a segment altogether is *unspecified*, which is not
//! the same thing as [`FeatureValue::Zero`].

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::SegmentError;

/// The state a single feature holds within a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureValue {
    /// Asserted present (`+`).
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Positive,
    /// Asserted absent (`-`).
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Negative,
    /// Asserted neutral (`0`).
    #[cfg_attr(feature = "serde", serde(rename = "0"))]
    Zero,
}

impl FeatureValue {
    /// All three states, in merge order.
    pub const ALL: [FeatureValue; 3] = [
        FeatureValue::Positive,
        FeatureValue::Negative,
        FeatureValue::Zero,
    ];

    /// Dictionary symbol for this state.
    pub const fn symbol(self) -> char {
        match self {
            FeatureValue::Positive => '+',
            FeatureValue::Negative => '-',
            FeatureValue::Zero => '0',
        }
    }

    /// Parse a dictionary symbol. Surrounding whitespace is not accepted.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(FeatureValue::Positive),
            "-" => Some(FeatureValue::Negative),
            "0" => Some(FeatureValue::Zero),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for FeatureValue {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureValue::from_symbol(s).ok_or_else(|| SegmentError::UnknownSymbol {
            symbol: s.to_string(),
        })
    }
}

impl TryFrom<char> for FeatureValue {
    type Error = SegmentError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(FeatureValue::Positive),
            '-' => Ok(FeatureValue::Negative),
            '0' => Ok(FeatureValue::Zero),
            other => Err(SegmentError::UnknownSymbol {
                symbol: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_parse_back_to_their_variant() {
        for value in FeatureValue::ALL {
            let mut buf = [0u8; 4];
            let s = value.symbol().encode_utf8(&mut buf);
            assert_eq!(FeatureValue::from_symbol(s), Some(value));
            assert_eq!(FeatureValue::try_from(value.symbol()), Ok(value));
        }
    }

    #[test]
    fn test_unknown_symbols_are_rejected() {
        assert_eq!(FeatureValue::from_symbol("x"), None);
        assert_eq!(FeatureValue::from_symbol(""), None);
        assert_eq!(FeatureValue::from_symbol(" +"), None);
        assert_eq!(FeatureValue::from_symbol("++"), None);
        assert_eq!(
            "?".parse::<FeatureValue>(),
            Err(SegmentError::UnknownSymbol { symbol: "?".into() })
        );
        assert!(FeatureValue::try_from('1').is_err());
    }

    #[test]
    fn test_display_is_the_symbol() {
        use alloc::format;
        assert_eq!(format!("{}", FeatureValue::Negative), "-");
        assert_eq!(format!("{}", FeatureValue::Zero), "0");
    }
}
