//! Response sanitization
//!
//! Model output frequently arrives wrapped in markdown code fences despite
//! the instruction not to add formatting. The sanitizer removes every fence
//! marker, with or without a language tag, wherever it appears, then trims
//! the remainder.

/// Characters allowed in a fence language tag (`typescript`, `c++`, `c#`, ...)
fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '#' | '.')
}

/// Strip markdown code-fence markers from model output
///
/// A language tag glued to a fence is consumed with it only when the tag
/// runs to a line break or to the end of the text; `` ``` `` followed by
/// prose keeps the prose. The function is idempotent: once all fences are
/// gone a second pass finds nothing to remove.
pub fn strip_code_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(idx) = rest.find("```") {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + 3..];

        let tag_end = rest.find(|c: char| !is_tag_char(c)).unwrap_or(rest.len());
        let after_tag = &rest[tag_end..];
        if tag_end > 0 && (after_tag.is_empty() || after_tag.starts_with(['\n', '\r'])) {
            rest = after_tag;
        }
    }

    out.push_str(rest);
    out.trim().to_string()
}
