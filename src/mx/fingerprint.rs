use std::fmt;

use super::MxRecord;
use crate::finding::Finding;

/// Email-filtering vendors recognizable from their MX hostnames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailFilter {
    ProofPoint,
    Mimecast,
}

impl MailFilter {
    /// Checked in this order against each host.
    pub const ALL: [MailFilter; 2] = [MailFilter::ProofPoint, MailFilter::Mimecast];

    pub fn marker(self) -> &'static str {
        match self {
            Self::ProofPoint => "pphosted.com",
            Self::Mimecast => "mimecast.com",
        }
    }

    pub fn vendor(self) -> &'static str {
        match self {
            Self::ProofPoint => "ProofPoint",
            Self::Mimecast => "Mimecast",
        }
    }
}

impl fmt::Display for MailFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vendor())
    }
}

/// First filter whose marker appears in `host`.
pub fn fingerprint_host(host: &str) -> Option<MailFilter> {
    MailFilter::ALL
        .into_iter()
        .find(|filter| host.contains(filter.marker()))
}

/// Walk `records` in order, reporting each host, and stop at the first host
/// that identifies a filtering vendor. Hosts after the match are not visited.
pub fn mx_findings(domain: &str, records: &[MxRecord]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for record in records {
        findings.push(Finding::MxHost {
            domain: domain.to_string(),
            host: record.exchange.clone(),
        });
        if let Some(vendor) = fingerprint_host(&record.exchange) {
            findings.push(Finding::MailFilter {
                vendor,
                host: record.exchange.clone(),
            });
            break;
        }
    }
    findings
}
