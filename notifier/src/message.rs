//! Plain-text digest message.
//!
//! Every line ends in CRLF, body included, since the raw text goes to the
//! relay unchanged.

use common::{JobPosting, LISTING_URL};

pub const SUBJECT: &str = "Daily Job Postings";

const CRLF: &str = "\r\n";
const GREETING: &str = "Hello,\r\n\r\n";
const NOTHING_FOUND: &str = "No current job postings found today.\r\n";
const LEAD_IN: &str = "Here are today's midlevel Software Engineer job postings:\r\n\r\n";
const SIGNATURE: &str = "\r\nBest regards,\r\nYour Job Scraper";

/// Body text: greeting, one `- title: url` line per posting, footer, signature.
pub fn compose_body(postings: &[JobPosting]) -> String {
    let mut body = String::from(GREETING);

    if postings.is_empty() {
        body.push_str(NOTHING_FOUND);
    } else {
        body.push_str(LEAD_IN);
    }

    for job in postings {
        body.push_str(&format!(
            "- {}: {}{CRLF}",
            single_line(&job.title),
            single_line(&job.url)
        ));
    }

    body.push_str(&format!(
        "{CRLF}You can find more job postings at {LISTING_URL}{CRLF}"
    ));
    body.push_str(SIGNATURE);
    body
}

/// Full message as submitted to the relay: header lines, a blank line, then the body.
pub fn compose_message(from: &str, to: &str, postings: &[JobPosting]) -> String {
    format!(
        "From: {from}{CRLF}To: {to}{CRLF}Subject: {SUBJECT}{CRLF}\
         Content-Type: text/plain; charset=utf-8{CRLF}\
         Content-Transfer-Encoding: 8bit{CRLF}{CRLF}{}",
        compose_body(postings)
    )
}

/// Line breaks inside scraped text would split a posting line, so they become spaces.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
