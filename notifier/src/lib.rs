//! Digest delivery
//!
//! Turns the collected postings into one plain-text email and submits it to
//! an SMTP relay. Delivery is attempted once.

mod config;
mod message;

pub use config::{
    ConfigError, MailConfig, DEFAULT_RELAY_HOST, DEFAULT_RELAY_PORT, FROM_VAR, HOST_VAR,
    PASSWORD_VAR, PORT_VAR, TO_VAR,
};
pub use message::{compose_body, compose_message, SUBJECT};

use std::time::Duration;

use common::JobPosting;
use lettre::address::{AddressError, Envelope};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{SmtpTransport, Transport};
use log::{debug, info};
use thiserror::Error;

const RELAY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),

    #[error("could not build envelope: {0}")]
    Envelope(#[from] lettre::error::Error),

    #[error("relay rejected the digest: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Composes the digest for `postings` and submits it to the configured relay.
///
/// Authenticates with `PLAIN` over a STARTTLS-upgraded connection and sends to
/// the single configured recipient.
pub fn send_digest(config: &MailConfig, postings: &[JobPosting]) -> Result<(), NotifyError> {
    let message = compose_message(
        &config.from.to_string(),
        &config.to.to_string(),
        postings,
    );
    let envelope = Envelope::new(Some(config.from.clone()), vec![config.to.clone()])?;

    let transport = SmtpTransport::starttls_relay(&config.relay_host)?
        .port(config.relay_port)
        .credentials(Credentials::new(
            config.from.to_string(),
            config.password.clone(),
        ))
        .authentication(vec![Mechanism::Plain])
        .timeout(Some(RELAY_TIMEOUT))
        .build();

    debug!(
        "Submitting {} byte digest to {}:{}",
        message.len(),
        config.relay_host,
        config.relay_port
    );
    transport.send_raw(&envelope, message.as_bytes())?;
    info!("Digest with {} postings sent to {}", postings.len(), config.to);
    Ok(())
}
