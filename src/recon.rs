//! The single-pass reconnaissance pipeline:
//! validate, resolve MX, query the realm endpoint, classify.

use thiserror::Error;

use crate::finding::Reporter;
use crate::mx::{self, LookupMx};
use crate::realm::{self, FetchRealm, RealmError};
use crate::validator::{EmailAddress, EmailError, parse_email};

#[derive(Debug, Error)]
pub enum ReconError {
    #[error(transparent)]
    InvalidInput(#[from] EmailError),
    #[error(transparent)]
    Resolution(#[from] mx::Error),
    #[error(transparent)]
    Realm(#[from] RealmError),
}

impl ReconError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Realm(err) if err.is_timeout())
    }

    /// Every failure ends the run with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Run one reconnaissance pass for `raw`, emitting findings to `reporter`
/// as each stage completes. The first failure aborts the pass.
pub fn run<R, F, S>(
    raw: &str,
    resolver: &R,
    realm: &F,
    reporter: &mut S,
) -> Result<EmailAddress, ReconError>
where
    R: LookupMx + ?Sized,
    F: FetchRealm + ?Sized,
    S: Reporter + ?Sized,
{
    let email = parse_email(raw)?;
    let domain = email.domain();
    tracing::debug!(%domain, "target domain");

    let records = mx::resolve_with(resolver, domain)?;
    for finding in mx::mx_findings(domain, &records) {
        reporter.emit(&finding);
    }

    let info = realm.fetch_realm(&email)?;
    tracing::debug!(namespace = %info.namespace_type, "realm decoded");

    reporter.section(&format!("Results for {domain}:"));
    for finding in realm::classify(domain, &info) {
        reporter.emit(&finding);
    }

    Ok(email)
}
