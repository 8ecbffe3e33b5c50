//! Error types for topology collection and description apply.
//!
//! Errors are categorized so callers can tell a fatal fact-source failure
//! from a degradable one (FEX on a platform without fabric extenders) and
//! from a per-command apply failure that only needs reporting.

use thiserror::Error;

/// Categories of errors, used to decide how a run reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required fact source could not be retrieved or decoded
    Source,
    /// The platform does not support the requested fact source
    Unsupported,
    /// A single configuration command failed to execute
    Apply,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Whether this category aborts the run before synthesis.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Source | Self::Other)
    }

    /// Whether the run continues with an empty result for the source.
    pub fn is_degradable(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

/// Errors that can occur while collecting facts or applying descriptions.
#[derive(Debug, Error)]
pub enum Error {
    /// A required fact source could not be retrieved
    #[error("source unavailable for '{command}': {message}")]
    SourceUnavailable {
        /// Operational command that was run
        command: String,
        /// Why the source could not be retrieved
        message: String,
    },

    /// A record returned by a source is missing a required field
    #[error("malformed record from '{command}': missing field '{field}'")]
    MalformedRecord {
        /// Operational command that produced the record
        command: String,
        /// Name of the missing field
        field: String,
    },

    /// The platform does not support the fact source
    #[error("unsupported platform: {platform}")]
    UnsupportedPlatform {
        /// Platform identity as reported by the device
        platform: String,
    },

    /// A configuration command failed to execute
    #[error("apply failed for '{command}': {message}")]
    ApplyFailure {
        /// Rendered command that failed
        command: String,
        /// Output or reason for the failure
        message: String,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a [`Error::SourceUnavailable`].
    pub fn source_unavailable(command: &str, message: impl Into<String>) -> Self {
        Error::SourceUnavailable {
            command: command.to_string(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::MalformedRecord`].
    pub fn malformed(command: &str, field: &str) -> Self {
        Error::MalformedRecord {
            command: command.to_string(),
            field: field.to_string(),
        }
    }

    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::SourceUnavailable { .. } | Error::MalformedRecord { .. } => {
                ErrorCategory::Source
            }
            Error::UnsupportedPlatform { .. } => ErrorCategory::Unsupported,
            Error::ApplyFailure { .. } => ErrorCategory::Apply,
            Error::Other(_) => ErrorCategory::Other,
        }
    }

    /// Whether this error aborts the run.
    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }
}

/// Result type for labelkit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_errors_are_fatal() {
        let err = Error::source_unavailable("show cdp neighbors", "timed out");
        assert_eq!(err.category(), ErrorCategory::Source);
        assert!(err.is_fatal());

        let err = Error::malformed("show port-channel summary", "port-channel");
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "malformed record from 'show port-channel summary': missing field 'port-channel'"
        );
    }

    #[test]
    fn test_unsupported_platform_degrades() {
        let err = Error::UnsupportedPlatform {
            platform: "Nexus9000 C93180YC-EX".into(),
        };
        assert!(!err.is_fatal());
        assert!(err.category().is_degradable());
    }

    #[test]
    fn test_apply_failure_is_not_fatal() {
        let err = Error::ApplyFailure {
            command: "interface Eth1/1 ; description x".into(),
            message: "% Invalid command".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Apply);
        assert!(!err.is_fatal());
        assert!(!err.category().is_degradable());
    }

    #[test]
    fn test_other_errors_are_fatal() {
        let err = Error::Other("empty device exec command".into());
        assert_eq!(err.category(), ErrorCategory::Other);
        assert!(err.is_fatal());
        assert!(!err.category().is_degradable());
    }
}
