//! Filename shortening and sanitization.

use regex::Regex;

/// Default stem length bound for [`shorten_filename`].
pub const DEFAULT_MAX_STEM_LENGTH: usize = 30;

/// Shorten a filename whose stem exceeds `max_length` characters.
///
/// Short names pass through unchanged. Long stems keep their first 15 and
/// last 10 characters around a literal `...`, followed by the original
/// extension, so a truncated stem is always 28 characters wide.
pub fn shorten_filename(filename: &str, max_length: usize) -> String {
    let (base, ext) = split_extension(filename);
    let chars: Vec<char> = base.chars().collect();
    if chars.len() <= max_length {
        return filename.to_string();
    }

    let head: String = chars.iter().take(15).collect();
    let tail: String = chars[chars.len().saturating_sub(10)..].iter().collect();
    format!("{}...{}{}", head, tail, ext)
}

/// Strip characters outside the safe filename set and trim surrounding
/// whitespace. Word characters, hyphen, underscore, period and space
/// survive; everything else is dropped.
pub fn clean_filename(title: &str) -> String {
    let pattern = Regex::new(r"[^\w\-_\. ]").unwrap();
    pattern.replace_all(title, "").trim().to_string()
}

/// Split a filename into stem and extension, keeping the dot with the
/// extension. Names that are nothing but leading dots have no extension.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => filename.split_at(idx),
        _ => (filename, ""),
    }
}
