//! DNS MX resolution and mail-filter fingerprinting.
//!
//! [`resolve_with`] performs a synchronous lookup through a [`LookupMx`]
//! source such as the resolver from [`system_resolver`];
//! [`mx_findings`] turns the answer into host and filtering-vendor findings.

mod error;
mod fingerprint;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use fingerprint::{MailFilter, fingerprint_host, mx_findings};
pub use resolver::{LookupMx, resolve_with, system_resolver};
pub use types::MxRecord;
