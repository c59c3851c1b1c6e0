//! Command value object

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of tokens: program followed by its arguments
///
/// Tokens are kept exactly as given. No trimming, deduplication or
/// environment expansion happens here, since the fingerprint is derived
/// from these bytes.
///
/// Serialized as a plain token array. Deserializing goes through
/// [`Command::new`], so an empty array is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Build a command from its tokens
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `tokens` is empty.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(Error::invalid_argument("Command must have at least one token"));
        }
        Ok(Self { tokens })
    }

    /// The program to run
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Arguments after the program
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// All tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens joined by a single space, used in diagnostics
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

impl TryFrom<Vec<String>> for Command {
    type Error = Error;

    fn try_from(tokens: Vec<String>) -> Result<Self> {
        Self::new(tokens)
    }
}

impl From<Command> for Vec<String> {
    fn from(command: Command) -> Self {
        command.tokens
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
