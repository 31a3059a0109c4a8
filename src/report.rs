// WHY: report rendering is pure string building so the binary only prints
// Covers the labelled demo walkthrough and the per-document analysis report

use serde::{Deserialize, Serialize};

use crate::extract::{extract_emails, extract_urls};
use crate::palindrome::is_palindrome;
use crate::stats::{analyze_text, TextStatistics};
use crate::transform::{capitalize_words, remove_extra_spaces, reverse_string};

/// Built-in multi-paragraph sample with two emails and two URLs
pub const SAMPLE_TEXT: &str = "Hello world! This is a sample text that shows what the textkit module can do.

The module provides helpers for working with text: statistics, palindrome checks,
email and URL extraction, and a few other useful transforms.

To get in touch write to admin@example.com or support@domain.org.
Also visit our site at https://example.com and the docs at https://docs.example.com/api.";

/// Words checked in the palindrome section of the demo
pub const PALINDROME_SAMPLES: &[&str] = &["топот", "A man, a plan, a canal: Panama", "hello", "казак"];

pub const REVERSAL_SAMPLE: &str = "Привет мир";

pub const CAPITALIZATION_SAMPLE: &str = "hello world from rust crate";

pub const MESSY_SAMPLE: &str = "  This    text\twith   extra\n\nspaces  ";

/// Everything the toolkit can say about one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub statistics: TextStatistics,
    pub palindrome: bool,
    pub emails: Vec<String>,
    pub urls: Vec<String>,
}

impl AnalysisReport {
    pub fn from_text(text: &str) -> Self {
        Self {
            statistics: analyze_text(text),
            palindrome: is_palindrome(text),
            emails: extract_emails(text),
            urls: extract_urls(text),
        }
    }

    /// Human-readable rendering used by `analyze --format text`
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        push_statistics(&mut out, &self.statistics);
        out.push_str(&format!("Palindrome: {}\n", self.palindrome));
        push_numbered(&mut out, "Emails found", &self.emails);
        push_numbered(&mut out, "URLs found", &self.urls);
        out
    }
}

/// Render the full labelled demo walkthrough for `sample`
pub fn demo_report(sample: &str) -> String {
    let mut out = String::new();
    out.push_str("=== textkit demo ===\n\n");

    out.push_str("1. Text analysis:\n");
    push_statistics(&mut out, &analyze_text(sample));
    out.push('\n');

    out.push_str("2. Palindrome check:\n");
    for word in PALINDROME_SAMPLES {
        out.push_str(&format!("   '{}' - palindrome: {}\n", word, is_palindrome(word)));
    }
    out.push('\n');

    out.push_str("3. String reversal:\n");
    out.push_str(&format!("   Original: '{REVERSAL_SAMPLE}'\n"));
    out.push_str(&format!("   Reversed: '{}'\n\n", reverse_string(REVERSAL_SAMPLE)));

    out.push_str("4. Word capitalization:\n");
    out.push_str(&format!("   Original: '{CAPITALIZATION_SAMPLE}'\n"));
    out.push_str(&format!("   Capitalized: '{}'\n\n", capitalize_words(CAPITALIZATION_SAMPLE)));

    out.push_str("5. Extra space removal:\n");
    out.push_str(&format!("   Original: '{MESSY_SAMPLE}'\n"));
    out.push_str(&format!("   Cleaned: '{}'\n\n", remove_extra_spaces(MESSY_SAMPLE)));

    out.push_str("6. Email extraction:\n");
    push_numbered(&mut out, "Emails found", &extract_emails(sample));
    out.push('\n');

    out.push_str("7. URL extraction:\n");
    push_numbered(&mut out, "URLs found", &extract_urls(sample));

    out
}

fn push_statistics(out: &mut String, stats: &TextStatistics) {
    out.push_str(&format!("   Words: {}\n", stats.words));
    out.push_str(&format!("   Characters (excluding spaces): {}\n", stats.characters));
    out.push_str(&format!("   Sentences: {}\n", stats.sentences));
    out.push_str(&format!("   Paragraphs: {}\n", stats.paragraphs));
}

fn push_numbered(out: &mut String, label: &str, items: &[String]) {
    out.push_str(&format!("   {label}: {}\n", items.len()));
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("   {}. {}\n", i + 1, item));
    }
}
