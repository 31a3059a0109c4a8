// WHY: every regex-driven operation shares one compiled pattern set
// Compiled on first use, immutable afterwards, safe to share across threads

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Maximal run of Unicode word characters (letters, digits, underscore)
pub const WORD_PATTERN: &str = r"\w+";

/// Maximal run of sentence terminators; "?!" and "..." count once
pub const SENTENCE_TERMINATOR_PATTERN: &str = r"[.!?]+";

/// Heuristic address shape, not RFC validation
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Scheme followed by everything up to the next whitespace, trailing punctuation included
pub const URL_PATTERN: &str = r"https?://\S+";

static SHARED_PATTERNS: OnceLock<TextPatterns> = OnceLock::new();

/// Compiled regex set backing word counting, sentence counting and extraction
pub struct TextPatterns {
    word: Regex,
    sentence_terminator: Regex,
    email: Regex,
    url: Regex,
}

impl TextPatterns {
    /// Compile all built-in patterns
    pub fn compile() -> Result<Self> {
        info!("Compiling text analysis patterns");

        let patterns = Self {
            word: compile_pattern("word", WORD_PATTERN)?,
            sentence_terminator: compile_pattern("sentence terminator", SENTENCE_TERMINATOR_PATTERN)?,
            email: compile_pattern("email", EMAIL_PATTERN)?,
            url: compile_pattern("url", URL_PATTERN)?,
        };

        debug!("Compiled 4 text analysis patterns");
        Ok(patterns)
    }

    /// Process-wide pattern set, compiled on first access
    pub fn shared() -> &'static TextPatterns {
        SHARED_PATTERNS.get_or_init(|| {
            // Constant patterns, see test_patterns_compile
            Self::compile().expect("built-in text patterns must compile")
        })
    }

    pub fn count_words(&self, text: &str) -> usize {
        self.word.find_iter(text).count()
    }

    pub fn count_sentence_terminators(&self, text: &str) -> usize {
        self.sentence_terminator.find_iter(text).count()
    }

    /// All email-shaped substrings, left to right, duplicates kept
    pub fn emails<'h>(&self, text: &'h str) -> Vec<&'h str> {
        find_all(&self.email, text)
    }

    /// All http/https URLs, left to right, duplicates kept
    pub fn urls<'h>(&self, text: &'h str) -> Vec<&'h str> {
        find_all(&self.url, text)
    }
}

fn compile_pattern(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Failed to compile {name} pattern: {pattern}"))
}

fn find_all<'h>(regex: &Regex, text: &'h str) -> Vec<&'h str> {
    regex.find_iter(text).map(|m| &text[m.range()]).collect()
}
