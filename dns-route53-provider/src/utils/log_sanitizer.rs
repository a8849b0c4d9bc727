//! Log sanitization utilities
//!
//! Prevents credentials and large API payloads from being fully exposed in
//! debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a credential kept visible in logs.
const VISIBLE_KEY_CHARS: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential, keeping only a short prefix.
///
/// `AKIDEXAMPLE` -> `AKID*******`
pub fn mask_secret(s: &str) -> String {
    let visible = floor_char_boundary(s, VISIBLE_KEY_CHARS.min(s.len() / 2));
    format!("{}{}", &s[..visible], "*".repeat(s[visible..].chars().count()))
}
