//! # phonoseg-core
//!
//! Phonetic segments as bundles of tri-state features.
//!
//! ---
//!
//! A segment says, for each feature it knows about, whether that feature is
//! present (`+`), absent (`-`) or neutral (`0`). A feature the segment does not
//! mention is *unspecified*, which is a different thing from neutral.
//!
//! Three operations carry the weight:
//!
//! **Assignment**: `set_positive`, `set_negative`, `set_zero`. A feature holds
//! exactly one state; assigning a new one replaces the old.
//!
//! **Condition matching**: `meets_conditions` tests a partial specification
//! ("positive voice, negative nasal"). Every listed feature must hold its
//! listed state; everything else is ignored.
//!
//! **Overlay**: `combine` copies a base segment and lets every feature the
//! overlay specifies override it. This is how a rule's output is written onto
//! the segment it applies to.
//!
//! ```text
//! feature table ──► Segment::from_dictionary ──► Segment ──► meets_conditions
//!                                                   │
//!                                 overlay ──► combine ──► new Segment
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`feature`] | [`FeatureValue`] | The three states and their `+ - 0` symbols |
//! | [`segment`] | [`Segment`] | Feature bundle, assignment, views, `combine` |
//! | [`conditions`] | [`Conditions`] | Partial specifications and `meets_conditions` |
//! | [`dictionary`] | [`DictionaryConfig`] | Build segments from `{feature: symbol}` tables |
//! | [`error`] | [`SegmentError`] | Construction errors |
//! | [`record`] | [`record::SegmentRecord`] | Serialisable form (requires `serde` feature) |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` with `alloc` by default. Enable `std` for
//! `std::error::Error` integration, `serde` for serialisation, and
//! `python-ffi` for the PyO3 extension module.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod conditions;
pub mod dictionary;
pub mod error;
pub mod feature;
pub mod segment;
#[cfg(feature = "serde")]
pub mod record;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use conditions::Conditions;
pub use dictionary::{DictionaryConfig, RawSymbol, IPA_KEY};
pub use error::{Result, SegmentError};
pub use feature::FeatureValue;
pub use segment::Segment;
