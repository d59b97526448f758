//! Daily job digest
//!
//! Collects mid-level Software Engineer postings from the careers listing
//! and mails them to the configured recipient.

mod logging;

use anyhow::{Context, Result};
use collector::{Collector, CollectorSettings, HttpPageSource};
use common::JobPosting;
use log::{error, info};
use notifier::MailConfig;

/// Optional override for the paged listing URL.
const LISTING_URL_VAR: &str = "JOBS_LISTING_URL";

fn main() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();
    logging::initialize();

    // Fail before scraping if the mail settings are unusable.
    let mail = MailConfig::from_env().context("invalid mail configuration")?;

    let settings = match std::env::var(LISTING_URL_VAR) {
        Ok(base_url) if !base_url.trim().is_empty() => CollectorSettings::new(base_url.trim()),
        _ => CollectorSettings::default(),
    };

    let postings = collect(settings)?;
    report(&postings);

    if let Err(err) = notifier::send_digest(&mail, &postings) {
        error!("Failed to send digest to {}: {}", mail.to, err);
        return Err(err).context("digest delivery failed");
    }

    Ok(())
}

fn collect(settings: CollectorSettings) -> Result<Vec<JobPosting>> {
    let source = HttpPageSource::new()?;
    let collector = Collector::new(settings, source)?;

    collector.collect().map_err(|err| {
        let kind = if err.is_transient() { "transient" } else { "permanent" };
        error!("Collection aborted ({} failure): {}", kind, err);
        anyhow::Error::new(err).context("collecting job postings")
    })
}

fn report(postings: &[JobPosting]) {
    info!(
        "Found {} midlevel Software Engineer positions:",
        postings.len()
    );
    for job in postings {
        info!("- {} ({})", job.title, job.url);
    }
}
