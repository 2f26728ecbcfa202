//! # ck-text
//!
//! Text tools: word statistics, Base64 encoding, hash digests and the
//! password generator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────────

/// Base64 encode/decode.
pub mod encoding;

/// Hex digests of text.
pub mod hashing;

/// Random password generation.
pub mod password;

/// Word counter statistics.
pub mod word_stats;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use encoding::{decode_base64, encode_base64};
pub use hashing::{digest, HashAlgorithm};
pub use password::{generate_password, PasswordOptions};
pub use word_stats::{analyze, WordStats};
