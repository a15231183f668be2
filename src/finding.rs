//! Labeled results of a reconnaissance pass and the sink they are emitted to.

use std::fmt;

use crate::mx::MailFilter;
use crate::realm::AuthProvider;

const COMPANION_TOOL: &str = "Go365 - https://github.com/optiv/Go365";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One classification emitted by the pipeline, with its evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    MxHost { domain: String, host: String },
    MailFilter { vendor: MailFilter, host: String },
    NamespaceUnknown,
    NamespaceManaged,
    CompanionTool,
    NamespaceFederated,
    AuthUrl { domain: String, url: String },
    AuthProvider { provider: AuthProvider },
    /// Catch-all for namespace values the endpoint is not known to return.
    UnexpectedNamespace { value: String },
    FederationBrand { name: String },
}

impl Finding {
    pub fn severity(&self) -> Severity {
        match self {
            Self::MxHost { .. }
            | Self::NamespaceManaged
            | Self::CompanionTool
            | Self::NamespaceFederated
            | Self::AuthUrl { .. } => Severity::Info,
            Self::MailFilter { .. }
            | Self::NamespaceUnknown
            | Self::AuthProvider { .. }
            | Self::FederationBrand { .. } => Severity::Warning,
            Self::UnexpectedNamespace { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MxHost { domain, host } => write!(f, "MX Records for {domain}: {host}"),
            Self::MailFilter { vendor, host } => write!(
                f,
                "MX Records indicate {} email filtering ({host})",
                vendor.vendor()
            ),
            Self::NamespaceUnknown => f.write_str(
                "NameSpaceType was Unknown, meaning this domain does not exist in Office365 or Azure",
            ),
            Self::NamespaceManaged => f.write_str(
                "NameSpaceType was Managed, meaning this domain is not federated (all auth goes through Office365)",
            ),
            Self::CompanionTool => write!(f, "Recommendation: use {COMPANION_TOOL}"),
            Self::NamespaceFederated => f.write_str(
                "NameSpaceType was Federated, meaning this domain has been verified in Office365 but they use a third-party auth provider",
            ),
            Self::AuthUrl { domain, url } => write!(f, "AuthURL for {domain}: {url}"),
            Self::AuthProvider { provider } => write!(
                f,
                "AuthURL looks like {} based on '{}' in URL (manually verify)",
                provider.name(),
                provider.marker()
            ),
            Self::UnexpectedNamespace { value } => write!(
                f,
                "NameSpaceType '{value}' looked weird, go investigate it manually"
            ),
            Self::FederationBrand { name } => write!(f, "FederationBrandName was set to {name}"),
        }
    }
}

/// Receives findings as soon as they are produced.
pub trait Reporter {
    /// Start a titled group of findings.
    fn section(&mut self, title: &str);

    fn emit(&mut self, finding: &Finding);
}

impl Reporter for Vec<Finding> {
    fn section(&mut self, _title: &str) {}

    fn emit(&mut self, finding: &Finding) {
        self.push(finding.clone());
    }
}
