//! System-wide constants for the giftmatch engine.

/// Default number of independent randomized matching attempts before the
/// matcher gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// Minimum number of participants a directory must contain.
pub const MIN_PARTICIPANTS: usize = 2;

/// Maximum length of an outgoing message subject after sanitization
/// (RFC 5322 line-length ceiling).
pub const MAX_SUBJECT_LEN: usize = 998;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "giftmatch";
