//! Exit code allow-list

use crate::constants::DEFAULT_ALLOWED_EXIT_CODES;
use std::collections::BTreeSet;

/// Exit codes that count as success for caching purposes
///
/// Anything outside the set is an execution failure: it is returned to the
/// caller as an error and never written to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCodePolicy {
    allowed: BTreeSet<i32>,
}

impl ExitCodePolicy {
    /// Build a policy from an explicit list of codes
    pub fn new<I: IntoIterator<Item = i32>>(codes: I) -> Self {
        Self {
            allowed: codes.into_iter().collect(),
        }
    }

    /// Only exit code 0 is allowed
    pub fn zero_only() -> Self {
        Self::new([0])
    }

    /// Whether `code` may be cached
    pub fn allows(&self, code: i32) -> bool {
        self.allowed.contains(&code)
    }

    /// Allowed codes in ascending order
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.allowed.iter().copied()
    }
}

impl Default for ExitCodePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_EXIT_CODES.iter().copied())
    }
}
