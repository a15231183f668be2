#![forbid(unsafe_code)]
//! realm_recon — unauthenticated reconnaissance of an email domain's
//! identity realm and mail filtering.

pub mod finding;
pub mod mx;
pub mod realm;
pub mod recon;
pub mod validator;

pub use finding::{Finding, Reporter, Severity};
pub use mx::{Error as MxError, LookupMx, MailFilter, MxRecord, system_resolver};
pub use realm::{
    AuthProvider, FetchRealm, NamespaceType, RealmClient, RealmClientOptions, RealmError,
    RealmInfo,
};
pub use recon::{ReconError, run};
pub use validator::{EmailAddress, EmailError, parse_email};
