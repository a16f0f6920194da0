//! This module implements `TemporalError`.

use core::fmt;

/// `TemporalError`'s error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A calendar or clock component violated its valid range at construction.
    Validation,
    /// A value could not be represented in the requested type or range.
    Range,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => "ValidationError",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `extended_temporal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalError {
    kind: ErrorKind,
    msg: &'static str,
}

impl TemporalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Create a validation error.
    #[inline]
    #[must_use]
    pub const fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: core::panic::Location::caller().file(),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub const fn into_message(self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for TemporalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TemporalError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = TemporalError::validation().with_message("month out of range.");
        assert_eq!(err.to_string(), "ValidationError: month out of range.");
        assert_eq!(err.kind(), ErrorKind::Validation);

        let bare = TemporalError::range();
        assert_eq!(bare.to_string(), "RangeError");
    }

    #[test]
    fn builders_set_their_kind() {
        assert_eq!(TemporalError::validation().kind(), ErrorKind::Validation);
        assert_eq!(TemporalError::range().kind(), ErrorKind::Range);
        let err = TemporalError::assert();
        assert_eq!(err.kind(), ErrorKind::Assert);
        assert!(err.to_string().starts_with("ImplementationError"));
        assert_eq!(
            TemporalError::range().with_message("out.").into_message(),
            "out."
        );
    }
}
