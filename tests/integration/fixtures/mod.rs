// Test fixtures with known texts and expected statistics
// WHY: Deterministic input/output pairs shared by API and CLI tests

/// Two paragraphs, one email, one URL; dots inside the address and URL count as terminators
pub const DOCUMENT_TEXT: &str = "Write to team@example.com today!\n\nRead https://example.com/docs, then reply. Thanks";

/// (words, characters, sentences, paragraphs) for DOCUMENT_TEXT
pub const DOCUMENT_EXPECTED: (usize, usize, usize, usize) = (14, 76, 4, 2);

/// Text with Cyrillic words and mixed whitespace
pub const CYRILLIC_TEXT: &str = "А роза упала\tна лапу Азора";
