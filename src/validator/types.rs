use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A syntactically valid email address.
///
/// Built only through [`EmailAddress::parse`], so exactly one `@` is always
/// present and both halves matched the address grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    raw: String,
    at: usize,
}

impl EmailAddress {
    pub(crate) fn from_validated(raw: String, at: usize) -> Self {
        Self { raw, at }
    }

    pub fn parse(input: &str) -> Result<Self, EmailError> {
        super::parse_email(input)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn local_part(&self) -> &str {
        &self.raw[..self.at]
    }

    /// Everything after the `@`; the lookup key for MX and realm queries.
    pub fn domain(&self) -> &str {
        &self.raw[self.at + 1..]
    }
}

impl FromStr for EmailAddress {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("no email address provided")]
    Missing,
    #[error("invalid email address '{input}'")]
    InvalidFormat { input: String },
}

impl EmailError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}
