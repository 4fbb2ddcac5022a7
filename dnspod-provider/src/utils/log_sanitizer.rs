//! Log sanitization utilities
//!
//! Keeps credentials and oversized payloads (long TXT values, full record lists)
//! out of debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Form parameter that carries the API credential.
const LOGIN_TOKEN_KEY: &str = "login_token=";

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
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
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

/// Replace the value of the `login_token` parameter in a form-encoded body.
pub fn redact_login_token(form_body: &str) -> String {
    form_body
        .split('&')
        .map(|pair| {
            if pair.starts_with(LOGIN_TOKEN_KEY) {
                format!("{LOGIN_TOKEN_KEY}<REDACTED>")
            } else {
                pair.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
