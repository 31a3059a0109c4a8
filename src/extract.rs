use tracing::trace;

use crate::patterns::TextPatterns;

/// Extract email-shaped substrings in order of occurrence
///
/// Syntactic heuristic only: plausible but invalid addresses are returned,
/// quoted local parts and internationalized domains are not recognized.
pub fn extract_emails(text: &str) -> Vec<String> {
    let emails: Vec<String> = TextPatterns::shared()
        .emails(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    trace!(count = emails.len(), "Extracted emails");
    emails
}

/// Extract http/https URLs in order of occurrence
///
/// A URL runs until the next whitespace, so punctuation glued to its end is kept.
pub fn extract_urls(text: &str) -> Vec<String> {
    let urls: Vec<String> = TextPatterns::shared()
        .urls(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    trace!(count = urls.len(), "Extracted URLs");
    urls
}
