//! Python FFI bindings via PyO3.
//!
//! Exposes [`Segment`](crate::Segment) to Python rule engines and corpus
//! loaders with the dictionary-shaped API they already speak.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from phonoseg_core import Segment
//!
//! m = Segment.from_dictionary({"IPA": "m", "voice": "+", "nasal": "+", "continuant": "-"})
//! m.meets_conditions({"positive": ["nasal"], "negative": ["continuant"]})  # True
//!
//! devoiced = m + Segment(negative=["voice"])
//! print(devoiced)  # <Segment> Positive: ["nasal"], Negative: ["continuant", "voice"], Zero: []
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::conditions::Conditions;
use crate::dictionary::{DictionaryConfig, RawSymbol};
use crate::segment::{owned_names, Segment};

fn list_condition(conditions: &Bound<'_, PyDict>, key: &str) -> PyResult<Vec<String>> {
    match conditions.get_item(key)? {
        Some(list) => list.extract(),
        None => Ok(Vec::new()),
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A phonetic segment: features that are positive, negative or zero.
///
/// Example::
///
///     b = Segment(positive=["voice"], negative=["nasal"], zero=["long"])
///     b.add_positive("nasal")
///     print(b.positive)  # ["voice", "nasal"]
#[pyclass(name = "Segment")]
#[derive(Clone)]
pub struct PySegment {
    inner: Segment,
}

#[pymethods]
impl PySegment {
    /// Create a segment from explicit lists.
    ///
    /// A name given in several lists ends in the last one (positive, negative, zero).
    #[new]
    #[pyo3(signature = (positive=Vec::new(), negative=Vec::new(), zero=Vec::new()))]
    pub fn new(positive: Vec<String>, negative: Vec<String>, zero: Vec<String>) -> Self {
        Self {
            inner: Segment::new(positive, negative, zero),
        }
    }

    /// Create a segment from a {feature: "+" | "-" | "0"} dictionary.
    ///
    /// The "IPA" key is ignored whatever its value. Raises ValueError on any
    /// other symbol, including values that are not strings.
    #[staticmethod]
    pub fn from_dictionary(features: &Bound<'_, PyDict>) -> PyResult<Self> {
        let mut entries: Vec<(String, RawSymbol)> = Vec::with_capacity(features.len());
        for (key, value) in features.iter() {
            let key: String = key.extract()?;
            let symbol = match value.extract::<String>() {
                Ok(text) => RawSymbol::Text(text),
                Err(_) => RawSymbol::NonText(value.repr()?.to_string()),
            };
            entries.push((key, symbol));
        }
        Segment::from_raw_dictionary_with(&DictionaryConfig::default(), entries)
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Features asserted present.
    #[getter]
    pub fn positive(&self) -> Vec<String> {
        owned_names(self.inner.positive())
    }

    /// Features asserted absent.
    #[getter]
    pub fn negative(&self) -> Vec<String> {
        owned_names(self.inner.negative())
    }

    /// Features asserted neutral.
    #[getter]
    pub fn zero(&self) -> Vec<String> {
        owned_names(self.inner.zero())
    }

    /// Make `feature` positive, removing it from negative and zero.
    pub fn add_positive(&mut self, feature: &str) {
        self.inner.set_positive(feature);
    }

    /// Make `feature` negative, removing it from positive and zero.
    pub fn add_negative(&mut self, feature: &str) {
        self.inner.set_negative(feature);
    }

    /// Make `feature` zero, removing it from positive and negative.
    pub fn add_zero(&mut self, feature: &str) {
        self.inner.set_zero(feature);
    }

    /// Test a {"positive": [...], "negative": [...], "zero": [...]} specification.
    ///
    /// Missing keys place no constraint.
    pub fn meets_conditions(&self, conditions: &Bound<'_, PyDict>) -> PyResult<bool> {
        let conditions = Conditions {
            positive: list_condition(conditions, "positive")?,
            negative: list_condition(conditions, "negative")?,
            zero: list_condition(conditions, "zero")?,
        };
        Ok(self.inner.meets_conditions(&conditions))
    }

    /// `a + b`: a new segment where b's specified features override a's.
    pub fn __add__(&self, other: &PySegment) -> PySegment {
        PySegment {
            inner: self.inner.combine(&other.inner),
        }
    }

    /// Python equality comparison (membership, not order).
    pub fn __eq__(&self, other: &PySegment) -> bool {
        self.inner == other.inner
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Phonetic segment feature bundles for Python.
#[pymodule]
pub fn phonoseg_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySegment>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
