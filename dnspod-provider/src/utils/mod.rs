//! Utility modules.

/// Serde helpers for JSON scalars that arrive as either strings or numbers.
pub mod lenient;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
