//! Error types for the giftmatch engine.
//!
//! All errors use the `GM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Ingest / validation errors
//! - 2xx: Matching errors
//! - 3xx: Delivery errors
//! - 9xx: General / internal errors

use thiserror::Error;

/// Central error enum for all giftmatch operations.
#[derive(Debug, Error)]
pub enum GiftmatchError {
    // =================================================================
    // Ingest / Validation Errors (1xx)
    // =================================================================
    /// The input CSV lacks a required header.
    #[error("GM_ERR_100: Input is missing required header: {expected}")]
    MissingHeader { expected: String },

    /// A record field is empty after trimming.
    #[error("GM_ERR_101: Missing required field: {field}")]
    MissingField { field: String },

    /// The same normalized email appeared twice in the participant input.
    #[error("GM_ERR_102: Duplicate email in participants: {email}")]
    DuplicateEmail { email: String },

    /// Too few valid participants to run an exchange.
    #[error("GM_ERR_103: Need at least 2 participants, got {count}")]
    InsufficientParticipants { count: usize },

    // =================================================================
    // Matching Errors (2xx)
    // =================================================================
    /// Every randomized attempt was exhausted without a valid assignment.
    #[error(
        "GM_ERR_200: No valid matching found after {attempts} attempts. \
         Consider relaxing forbidden pairs or previous matches, or adding \
         more participants."
    )]
    NoValidMatching { attempts: usize },

    // =================================================================
    // Delivery Errors (3xx)
    // =================================================================
    /// An address could not be parsed as a mailbox.
    #[error("GM_ERR_300: Invalid email address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// SMTP relay setup or connection failed.
    #[error("GM_ERR_301: SMTP connection failed: {reason}")]
    SmtpConnect { reason: String },

    /// An outgoing message could not be assembled.
    #[error("GM_ERR_302: Message composition failed: {reason}")]
    Compose { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// I/O error (disk, network).
    #[error("GM_ERR_900: I/O error: {0}")]
    Io(String),

    /// CSV parse error.
    #[error("GM_ERR_901: CSV error: {0}")]
    Csv(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GiftmatchError>;

// Conversion from std::io::Error
impl From<std::io::Error> for GiftmatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for GiftmatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GiftmatchError::DuplicateEmail {
            email: "alice@host.org".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("GM_ERR_102"), "Got: {msg}");
    }

    #[test]
    fn no_valid_matching_carries_guidance() {
        let err = GiftmatchError::NoValidMatching { attempts: 30 };
        let msg = format!("{err}");
        assert!(msg.contains("GM_ERR_200"));
        assert!(msg.contains("30 attempts"));
        assert!(msg.contains("relaxing forbidden pairs"));
    }

    #[test]
    fn all_errors_have_gm_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GiftmatchError::MissingHeader {
                expected: "name,email".into(),
            }),
            Box::new(GiftmatchError::MissingField {
                field: "name".into(),
            }),
            Box::new(GiftmatchError::InsufficientParticipants { count: 1 }),
            Box::new(GiftmatchError::InvalidAddress {
                address: "nope".into(),
                reason: "missing domain".into(),
            }),
            Box::new(GiftmatchError::SmtpConnect {
                reason: "refused".into(),
            }),
            Box::new(GiftmatchError::Io("disk".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GM_ERR_"),
                "Error missing GM_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GiftmatchError = io.into();
        assert!(matches!(err, GiftmatchError::Io(_)));
        assert!(format!("{err}").contains("gone"));
    }
}
