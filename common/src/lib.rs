/// Public listing page, linked from the digest footer.
pub const LISTING_URL: &str =
    "https://careers.airbnb.com/positions/?_departments=engineering&_offices=united-states";

/// Listing page with the page number left open at the end.
pub const PAGED_LISTING_URL: &str =
    "https://careers.airbnb.com/positions/?_departments=engineering&_offices=united-states&_paged=";

/// A single job advertisement pulled from a listing page.
///
/// `url` is whatever the listing linked to, absolute or site-relative, and is
/// empty when the item carried no link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub url: String,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
