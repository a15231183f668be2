//! Identity-realm discovery: query, decode and classify.

mod classify;
mod client;
mod error;
mod options;
mod types;

pub use classify::{AuthProvider, auth_providers, classify};
pub use client::{FetchRealm, RealmClient};
pub use error::RealmError;
pub use options::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, RealmClientOptions};
pub use types::{NamespaceType, RealmInfo};
