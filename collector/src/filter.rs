//! Title filter for mid-level, platform-generic engineering roles.

/// A title must contain this to be reported.
pub const REQUIRED_TERM: &str = "Software Engineer";

/// A title containing any of these is dropped. Matching is case-sensitive.
pub const EXCLUDED_TERMS: [&str; 6] = ["Senior", "Staff", "Sr.", "Principal", "Android", "iOS"];

/// Returns true when a posting with this title should end up in the digest.
pub fn is_wanted_title(title: &str) -> bool {
    title.contains(REQUIRED_TERM) && !EXCLUDED_TERMS.iter().any(|term| title.contains(term))
}
