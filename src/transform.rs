// WHY: string-to-string transforms kept free of regex so they stay single-pass char loops

/// Reverse text by Unicode scalar value
///
/// Combining marks are reversed like any other scalar and end up detached
/// from their base character.
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Uppercase the first scalar of every whitespace-separated word
///
/// The rest of each word is left as-is, so `"hELLo"` becomes `"HELLo"`.
/// Runs of whitespace collapse to a single space and the ends are trimmed.
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(upper_one_to_one(first));
            result.push_str(chars.as_str());
        }
    }

    result
}

// Multi-scalar mappings ('ß' -> "SS") leave the character unchanged
fn upper_one_to_one(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Trim the ends and collapse every interior whitespace run to one ASCII space
pub fn remove_extra_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    remove_extra_spaces_into(text, &mut result);
    result
}

/// Same as [`remove_extra_spaces`], writing into a caller-owned buffer
pub fn remove_extra_spaces_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}
