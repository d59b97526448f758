//! Extraction of postings from one listing page.

use common::JobPosting;
use scraper::{Html, Selector};

use crate::CollectError;

/// Every posting is an `<li role="listitem">` inside `<ul class="job-list" role="list">`.
const ITEM_SELECTOR: &str = "ul.job-list[role='list'] li[role='listitem']";
/// Title and link live in the `<h3 class="text-size-4">` element's anchor.
const LINK_SELECTOR: &str = "h3.text-size-4 a";

/// Selectors compiled once and reused for all pages.
#[derive(Debug)]
pub struct ListingSelectors {
    item: Selector,
    link: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self, CollectError> {
        Ok(Self {
            item: compile(ITEM_SELECTOR)?,
            link: compile(LINK_SELECTOR)?,
        })
    }

    /// Returns every item on the page, unfiltered and in document order.
    ///
    /// An item without a title anchor yields an empty title and url rather
    /// than being skipped, so the raw count still matches the page.
    pub fn parse_listing(&self, html: &str) -> Vec<JobPosting> {
        let document = Html::parse_document(html);

        document
            .select(&self.item)
            .map(|item| {
                let link = item.select(&self.link).next();

                let title = link
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();
                let url = link
                    .and_then(|el| el.value().attr("href"))
                    .unwrap_or_default()
                    .to_string();

                JobPosting { title, url }
            })
            .collect()
    }
}

fn compile(selector: &str) -> Result<Selector, CollectError> {
    Selector::parse(selector).map_err(|err| CollectError::Selector(format!("{selector}: {err:?}")))
}
