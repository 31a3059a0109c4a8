use crate::transform::reverse_string;

/// Characters that survive palindrome canonicalization
///
/// ASCII letters and digits plus the basic Cyrillic alphabet `А..=Я`, `а..=я`.
/// Everything else (spaces, punctuation, other scripts) is dropped.
pub fn is_canonical_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, 'А'..='Я' | 'а'..='я')
}

/// Reduce text to its palindrome-comparable form: allowed characters only, lowercased
pub fn canonical_form(text: &str) -> String {
    text.chars()
        .filter(|&ch| is_canonical_char(ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check whether text reads the same both ways after canonicalization
///
/// An empty canonical form counts as a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let canonical = canonical_form(text);
    canonical == reverse_string(&canonical)
}
