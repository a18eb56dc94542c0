//! SMTP delivery with per-recipient failure isolation.

use std::fmt;

use giftmatch_types::{GiftmatchError, Pairing, Result};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use serde::{Deserialize, Serialize};

use crate::message::{compose, parse_mailbox};
use crate::template::MessageTemplate;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection settings for the outbound relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS (typically port 465). When false the connection starts
    /// plain and upgrades via STARTTLS (typically port 587).
    pub implicit_tls: bool,
    /// Login credentials; `None` for relays that accept unauthenticated
    /// submission.
    pub credentials: Option<SmtpCredentials>,
}

/// SMTP login. `Debug` redacts the password so configs can be logged.
#[derive(Clone, Serialize, Deserialize)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Build a blocking SMTP transport from the config.
///
/// # Errors
/// `SmtpConnect` if relay setup fails (e.g. TLS parameters cannot be built
/// for the host).
pub fn connect(config: &SmtpConfig) -> Result<SmtpTransport> {
    let builder = if config.implicit_tls {
        SmtpTransport::relay(&config.host)
    } else {
        SmtpTransport::starttls_relay(&config.host)
    }
    .map_err(|err| GiftmatchError::SmtpConnect {
        reason: err.to_string(),
    })?;

    let mut builder = builder.port(config.port);
    if let Some(credentials) = &config.credentials {
        builder = builder.credentials(Credentials::new(
            credentials.username.clone(),
            credentials.password.clone(),
        ));
    }
    Ok(builder.build())
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

/// Outcome of one delivery batch: how many messages went out, and what
/// failed for whom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub sent: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    #[must_use]
    pub fn all_sent(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One recipient the batch could not reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFailure {
    pub address: String,
    pub reason: String,
}

/// Send one notification per pairing, addressed to the giver.
///
/// A failure for one recipient — whether composing the message or sending
/// it — is recorded in the report and delivery continues with the rest of
/// the batch. Only an unusable organizer address fails the whole call,
/// since it would fail every message identically.
pub fn deliver<T>(
    transport: &T,
    pairings: &[Pairing],
    template: &MessageTemplate,
    organizer: &str,
) -> Result<DeliveryReport>
where
    T: Transport,
    T::Error: fmt::Display,
{
    parse_mailbox(organizer)?;

    let mut report = DeliveryReport::default();
    for pairing in pairings {
        let address = pairing.giver_email.to_string();
        let outcome = match compose(template, pairing, organizer) {
            Ok(message) => transport
                .send(&message)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };
        match outcome {
            Ok(()) => report.sent += 1,
            Err(reason) => {
                tracing::warn!(address = %address, reason = %reason, "Delivery failed");
                report.failures.push(DeliveryFailure { address, reason });
            }
        }
    }

    tracing::info!(
        sent = report.sent,
        failed = report.failures.len(),
        "Delivery batch complete"
    );
    Ok(report)
}
