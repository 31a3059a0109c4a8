use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::patterns::TextPatterns;

/// Separator between paragraphs: one blank line
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Word, character, sentence and paragraph counts for one piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Maximal runs of word characters
    pub words: usize,
    /// Unicode scalar values, ASCII spaces excluded
    pub characters: usize,
    /// Runs of `.`, `!`, `?`; unterminated non-blank text counts as one
    pub sentences: usize,
    /// Segments between blank lines; empty text counts as one
    pub paragraphs: usize,
}

/// Analyze text and return its statistics
pub fn analyze_text(text: &str) -> TextStatistics {
    let patterns = TextPatterns::shared();

    let stats = TextStatistics {
        words: patterns.count_words(text),
        characters: count_characters(text),
        sentences: count_sentences(patterns, text),
        paragraphs: count_paragraphs(text),
    };

    trace!(?stats, bytes = text.len(), "Analyzed text");
    stats
}

// Only U+0020 is excluded; tabs and newlines still count
fn count_characters(text: &str) -> usize {
    text.chars().filter(|&ch| ch != ' ').count()
}

fn count_sentences(patterns: &TextPatterns, text: &str) -> usize {
    match patterns.count_sentence_terminators(text) {
        0 if !text.trim().is_empty() => 1,
        count => count,
    }
}

fn count_paragraphs(text: &str) -> usize {
    // split() on "" would also give one segment, keep the rule explicit
    if text.is_empty() {
        return 1;
    }
    text.split(PARAGRAPH_SEPARATOR).count()
}
