//! Content-addressed cache keys for commands
//!
//! A fingerprint is `<prefix><sha256 hex>` over the command tokens. The
//! prefix keeps command entries apart from unrelated keys living in the same
//! cache database.
//!
//! ## Token boundaries
//!
//! [`FingerprintScheme::Concatenated`] feeds token bytes back to back, so
//! `["ab", "c"]` and `["a", "bc"]` share a key. Keys produced this way match
//! entries written by older deployments. [`FingerprintScheme::LengthPrefixed`]
//! frames every token with its length and never collides on re-tokenization.

use crate::constants::CACHE_KEY_PREFIX;
use crate::value_objects::Command;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// How token bytes are fed into the digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerprintScheme {
    /// Tokens concatenated without separators
    #[default]
    Concatenated,
    /// Each token preceded by its byte length as a little-endian `u64`
    LengthPrefixed,
}

/// Deterministic cache key for a command
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint `command` using `scheme`, prefixing the digest with `prefix`
    pub fn compute(command: &Command, scheme: FingerprintScheme, prefix: &str) -> Self {
        Self::from_tokens(command.tokens(), scheme, prefix)
    }

    /// Fingerprint raw tokens without building a [`Command`]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], scheme: FingerprintScheme, prefix: &str) -> Self {
        let mut hasher = Sha256::new();
        for token in tokens {
            let bytes = token.as_ref().as_bytes();
            if scheme == FingerprintScheme::LengthPrefixed {
                hasher.update((bytes.len() as u64).to_le_bytes());
            }
            hasher.update(bytes);
        }
        Self(format!("{prefix}{}", hex::encode(hasher.finalize())))
    }

    /// The key as stored in the cache
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying key
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fingerprint tokens with the default scheme and `cmd_` prefix
pub fn fingerprint<S: AsRef<str>>(tokens: &[S]) -> String {
    Fingerprint::from_tokens(tokens, FingerprintScheme::default(), CACHE_KEY_PREFIX).into_string()
}
