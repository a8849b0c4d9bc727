//! Utility modules.

/// DNS name helpers shared by the resolver and the record operations.
pub mod names;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
