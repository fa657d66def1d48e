use alloc::string::String;

use thiserror::Error;

/// Why a region could not be constructed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RegionError {
    /// An element-sourced construction matched no element.
    #[error("unable to find an element matching `{0}`")]
    NotFound(String),
    /// The construction input was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ArgumentError {
    /// A required edge (`top` or `left`) was absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("`{name}` must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ArgumentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArgumentError::NotFinite { name, value })
    }
}
