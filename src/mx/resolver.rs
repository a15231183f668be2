use trust_dns_resolver::{Resolver, error::ResolveError};

use super::{Error, MxRecord};

/// Build a resolver from the system configuration (`/etc/resolv.conf` or
/// the platform equivalent).
pub fn system_resolver() -> Result<Resolver, Error> {
    Resolver::from_system_conf().map_err(Error::resolver_init)
}

/// Lookup MX records for `domain` through `resolver`.
///
/// The domain is normalized via IDNA first. Records keep the order the
/// resolver returned them in; nothing is sorted or deduplicated.
pub fn resolve_with<R>(resolver: &R, domain: &str) -> Result<Vec<MxRecord>, Error>
where
    R: LookupMx + ?Sized,
{
    let ascii = normalize_domain(domain)?;
    tracing::debug!(domain = %ascii, "looking up MX records");
    let records = resolver
        .lookup_mx(&ascii)
        .map_err(|err| Error::lookup(&ascii, err))?;
    tracing::debug!(domain = %ascii, count = records.len(), "MX lookup finished");
    Ok(records)
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

/// Drop the root label's trailing dot; case is kept as the resolver gave it.
pub(crate) fn normalize_exchange(exchange: String) -> String {
    exchange.trim_end_matches('.').to_string()
}

/// Source of MX answers. Implemented for the system [`Resolver`].
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = Resolver::mx_lookup(self, domain)?;
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }
}
