use std::fmt;

use super::{NamespaceType, RealmInfo};
use crate::finding::Finding;

/// Identity providers recognizable from a federated domain's auth URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    PingIdentity,
    Okta,
    Adfs,
    NetIq,
}

impl AuthProvider {
    pub const ALL: [AuthProvider; 4] = [
        AuthProvider::PingIdentity,
        AuthProvider::Okta,
        AuthProvider::Adfs,
        AuthProvider::NetIq,
    ];

    pub fn marker(self) -> &'static str {
        match self {
            Self::PingIdentity => "idp/prp.wsf",
            Self::Okta => "okta.com",
            Self::Adfs => "adfs/ls",
            Self::NetIq => "nidp/app",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::PingIdentity => "Ping Identity",
            Self::Okta => "Okta",
            Self::Adfs => "ADFS",
            Self::NetIq => "NetIQ Access Manager",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every provider whose marker appears in `auth_url`. Markers are checked
/// independently, so more than one can match.
pub fn auth_providers(auth_url: &str) -> Vec<AuthProvider> {
    AuthProvider::ALL
        .into_iter()
        .filter(|provider| auth_url.contains(provider.marker()))
        .collect()
}

/// Findings for a decoded realm answer about `domain`.
pub fn classify(domain: &str, info: &RealmInfo) -> Vec<Finding> {
    let mut findings = Vec::new();

    match info.namespace() {
        NamespaceType::Unknown => findings.push(Finding::NamespaceUnknown),
        NamespaceType::Managed => {
            findings.push(Finding::NamespaceManaged);
            findings.push(Finding::CompanionTool);
        }
        NamespaceType::Federated => {
            findings.push(Finding::NamespaceFederated);
            findings.push(Finding::AuthUrl {
                domain: domain.to_string(),
                url: info.auth_url.clone(),
            });
            findings.extend(
                auth_providers(&info.auth_url)
                    .into_iter()
                    .map(|provider| Finding::AuthProvider { provider }),
            );
        }
        NamespaceType::Other(value) => findings.push(Finding::UnexpectedNamespace { value }),
    }

    if !info.federation_brand_name.is_empty() {
        findings.push(Finding::FederationBrand {
            name: info.federation_brand_name.clone(),
        });
    }

    findings
}
