//! Chart sample model and validated decoding.
//!
//! Samples arriving from callers are plain `{ label, value }` pairs. The
//! layout code tolerates bad values, but anything decoded from external data
//! goes through [`Sample::new`] so problems surface as a [`SampleError`]
//! instead of a silently flattened bar.

#[cfg(test)]
#[path = "samples_test.rs"]
mod samples_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`Sample::new`] and [`parse_samples`].
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The value is NaN or infinite.
    #[error("sample '{label}' has a non-finite value")]
    NonFinite { label: String },
    /// The value is below zero.
    #[error("sample '{label}' has negative value {value}")]
    Negative { label: String, value: f64 },
    /// An entry in a decoded sequence failed validation.
    #[error("sample at index {index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: Box<SampleError>,
    },
    /// The input was not a JSON array of `{ label, value }` objects.
    #[error("malformed sample data: {0}")]
    Json(#[from] serde_json::Error),
}

/// One labeled value rendered as a single bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    /// Build a sample, rejecting non-finite and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::NonFinite`] or [`SampleError::Negative`].
    pub fn new(label: impl Into<String>, value: f64) -> Result<Self, SampleError> {
        let label = label.into();
        if !value.is_finite() {
            return Err(SampleError::NonFinite { label });
        }
        if value < 0.0 {
            return Err(SampleError::Negative { label, value });
        }
        Ok(Self { label, value })
    }

    /// Whether the value satisfies the non-negative finite invariant.
    pub fn is_valid(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}

/// Decode a JSON array of samples and validate every entry.
///
/// # Errors
///
/// Returns [`SampleError::Json`] for malformed input, or
/// [`SampleError::Invalid`] naming the first entry that fails validation.
pub fn parse_samples(raw: &str) -> Result<Vec<Sample>, SampleError> {
    let decoded: Vec<Sample> = serde_json::from_str(raw)?;
    decoded
        .into_iter()
        .enumerate()
        .map(|(index, sample)| {
            Sample::new(sample.label, sample.value).map_err(|source| SampleError::Invalid {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
