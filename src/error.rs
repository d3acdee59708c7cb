//! Error types shared by the whole crate.
//!
//! Every fallible operation fails fast with an [`EngineError`]. Errors are
//! grouped into two families through [`EngineError::kind`]:
//! - [`ErrorKind::Type`] – the wrong kind of value was supplied (e.g. NaN
//!   where a number is required)
//! - [`ErrorKind::Range`] – the value has the right kind but is invalid
//!   (non-positive delay, zero-length vector, unknown name)
//!
//! Loading configuration or manifests adds a third family, [`ErrorKind::Io`].

use thiserror::Error;

/// Coarse classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Range,
    Io,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A numeric argument was NaN.
    #[error("{what} must be a number")]
    NotANumber { what: &'static str },

    /// A numeric argument was zero, negative or infinite.
    #[error("{what} must be a positive number, got {value}")]
    NotPositive { what: &'static str, value: f64 },

    /// A vector operation needs a non-zero length.
    #[error("can't {op} a vector of length zero")]
    ZeroLength { op: &'static str },

    #[error("unrecognized tween function \"{0}\"")]
    UnknownEasing(String),

    #[error("unknown anchor \"{name}\", must be one of {expected}")]
    UnknownAnchor { name: String, expected: &'static str },

    #[error("unknown image \"{0}\"")]
    UnknownImage(String),

    /// Pixel data does not match the surface dimensions.
    #[error("pixel buffer of {len} bytes does not fit a {width}x{height} surface")]
    InvalidBuffer { len: usize, width: u32, height: u32 },

    #[error("config error: {0}")]
    Config(String),

    #[error("manifest error: {0}")]
    Manifest(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NotANumber { .. } => ErrorKind::Type,
            EngineError::NotPositive { .. }
            | EngineError::ZeroLength { .. }
            | EngineError::UnknownEasing(_)
            | EngineError::UnknownAnchor { .. }
            | EngineError::UnknownImage(_)
            | EngineError::InvalidBuffer { .. } => ErrorKind::Range,
            EngineError::Config(_) | EngineError::Manifest(_) => ErrorKind::Io,
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Check that `value` is a finite, strictly positive number.
///
/// NaN is reported as a type error, everything else out of range as a range
/// error.
pub fn ensure_positive(what: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_nan() {
        return Err(EngineError::NotANumber { what });
    }
    if value <= 0.0 || value.is_infinite() {
        return Err(EngineError::NotPositive { what, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("delay", 0.5), Ok(0.5));
    }

    #[test]
    fn test_ensure_positive_nan_is_type_error() {
        let err = ensure_positive("delay", f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_ensure_positive_rejects_zero_negative_and_infinite() {
        for value in [0.0, -1.0, f64::INFINITY] {
            let err = ensure_positive("duration", value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range, "{value}");
        }
    }

    #[test]
    fn test_error_messages() {
        let err = EngineError::UnknownEasing("wobble".into());
        assert_eq!(err.to_string(), "unrecognized tween function \"wobble\"");
        let err = EngineError::ZeroLength { op: "normalize" };
        assert_eq!(err.to_string(), "can't normalize a vector of length zero");
    }
}
