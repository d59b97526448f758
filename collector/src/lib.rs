//! Careers-site collector
//!
//! Walks the paginated engineering listing page by page, pulls out every
//! posting and keeps the ones whose title passes the filter.

mod error;
mod fetch;
mod filter;
mod listing;

pub use error::CollectError;
pub use fetch::{HttpPageSource, PageSource};
pub use filter::{is_wanted_title, EXCLUDED_TERMS, REQUIRED_TERM};
pub use listing::ListingSelectors;

use common::{JobPosting, PAGED_LISTING_URL};
use log::info;

/// A page with fewer items than this is taken to be the last one. The site
/// does not say how many pages there are, so this has to track its page size.
pub const FULL_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorSettings {
    /// Listing URL the page number is appended to.
    pub base_url: String,
    pub full_page_size: usize,
}

impl CollectorSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            full_page_size: FULL_PAGE_SIZE,
        }
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}", self.base_url, page)
    }
}

impl Default for CollectorSettings {
    fn default() -> Self {
        Self::new(PAGED_LISTING_URL)
    }
}

pub struct Collector<S> {
    settings: CollectorSettings,
    source: S,
    selectors: ListingSelectors,
}

impl<S: PageSource> Collector<S> {
    pub fn new(settings: CollectorSettings, source: S) -> Result<Self, CollectError> {
        Ok(Self {
            settings,
            source,
            selectors: ListingSelectors::new()?,
        })
    }

    /// Runs the whole pagination loop.
    ///
    /// Stops after a page with no items or with fewer than
    /// `full_page_size` items. The first fetch error ends the run and no
    /// partial result is returned.
    pub fn collect(&self) -> Result<Vec<JobPosting>, CollectError> {
        let mut accepted = Vec::new();
        let mut page = 1;

        loop {
            let url = self.settings.page_url(page);
            info!("Fetching page {}: {}", page, url);

            let html = self.source.fetch(page, &url)?;
            let items = self.selectors.parse_listing(&html);

            if items.is_empty() {
                info!("No job listings found on page {}; ending pagination.", page);
                break;
            }

            let item_count = items.len();
            accepted.extend(items.into_iter().filter(|posting| is_wanted_title(&posting.title)));

            // Compared against the raw count, not what survived the filter.
            if item_count < self.settings.full_page_size {
                info!(
                    "Only {} job items on page {}; treating it as the last page.",
                    item_count, page
                );
                break;
            }

            page += 1;
        }

        Ok(accepted)
    }
}
