pub mod extract;
pub mod palindrome;
pub mod patterns;
pub mod report;
pub mod session;
pub mod stats;
pub mod transform;

// Re-export the text operations for convenient access
pub use extract::{extract_emails, extract_urls};
pub use palindrome::{canonical_form, is_palindrome};
pub use stats::{analyze_text, TextStatistics};
pub use transform::{capitalize_words, remove_extra_spaces, reverse_string};

// Re-export harness types used by the binary and integration tests
pub use report::{demo_report, AnalysisReport, SAMPLE_TEXT};
pub use session::{run_session, SessionConfig, SessionSummary};
