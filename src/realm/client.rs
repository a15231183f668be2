use reqwest::blocking::Client;

use super::{RealmClientOptions, RealmError, RealmInfo};
use crate::validator::EmailAddress;

/// Source of realm discovery answers.
pub trait FetchRealm {
    fn fetch_realm(&self, email: &EmailAddress) -> Result<RealmInfo, RealmError>;
}

/// Blocking client for the realm discovery endpoint.
///
/// One GET per call, bounded by the configured timeout; no retry, no cache.
#[derive(Debug, Clone)]
pub struct RealmClient {
    client: Client,
    options: RealmClientOptions,
}

impl RealmClient {
    pub fn new(options: RealmClientOptions) -> Result<Self, RealmError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(RealmError::client_init)?;
        Ok(Self { client, options })
    }

    /// Raw response body for `email`. The status code is logged, not checked.
    pub fn fetch_body(&self, email: &EmailAddress) -> Result<String, RealmError> {
        let endpoint = self.options.endpoint.as_str();
        let timeout = self.options.timeout;
        tracing::debug!(%endpoint, ?timeout, "querying realm endpoint");

        let resp = self
            .client
            .get(endpoint)
            .query(&[("login", email.as_str())])
            .send()
            .map_err(|err| RealmError::transport(endpoint, timeout, err))?;

        tracing::debug!(status = %resp.status(), url = %resp.url(), "realm endpoint answered");

        let body = resp
            .text()
            .map_err(|err| RealmError::transport(endpoint, timeout, err))?;
        tracing::debug!(bytes = body.len(), "realm body received");
        Ok(body)
    }
}

impl FetchRealm for RealmClient {
    fn fetch_realm(&self, email: &EmailAddress) -> Result<RealmInfo, RealmError> {
        let body = self.fetch_body(email)?;
        RealmInfo::from_json(&body)
    }
}
