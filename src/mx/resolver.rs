use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    proto::rr::{RData, RecordType},
};

use crate::config::Settings;
use crate::domain::{is_valid_domain, normalize_domain};

use super::{Error, LookupReport, MxRecord, QueryKind, evaluate_records};

/// Resolve the MX records of `domain` with the system resolver and look for
/// a known provider among them.
///
/// One DNS question is sent. A domain without MX answers yields an empty
/// report, every other resolver failure is returned to the caller.
pub fn perform_mx_lookup(
    domain: &str,
    settings: &Settings,
    kind: QueryKind,
) -> Result<LookupReport, Error> {
    let resolver = Resolver::from_system_conf().map_err(Error::resolver_init)?;
    lookup_with(&resolver, domain, settings, kind)
}

pub(crate) fn lookup_with<R>(
    resolver: &R,
    domain: &str,
    settings: &Settings,
    kind: QueryKind,
) -> Result<LookupReport, Error>
where
    R: LookupMx,
{
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    if !is_valid_domain(trimmed) {
        return Err(Error::invalid_domain(trimmed));
    }
    let ascii = normalize_domain(trimmed)?;

    tracing::debug!(domain = %ascii, ?kind, "sending DNS query");
    let records = resolver
        .lookup_mx(&ascii, kind)
        .map_err(|err| Error::lookup(ascii.as_str(), err))?;

    Ok(evaluate_records(trimmed, &records, &settings.known_servers))
}

pub(crate) trait LookupMx {
    fn lookup_mx(&self, domain: &str, kind: QueryKind) -> Result<Vec<MxRecord>, ResolveError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str, kind: QueryKind) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = match Resolver::lookup(self, domain, record_type(kind)) {
            Ok(lookup) => lookup,
            Err(err) if should_treat_as_empty(&err) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        let records = lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::MX(mx) => Some(MxRecord::new(mx.preference(), mx.exchange().to_utf8())),
                _ => None,
            })
            .collect();
        Ok(records)
    }
}

fn record_type(kind: QueryKind) -> RecordType {
    match kind {
        QueryKind::Any => RecordType::ANY,
        QueryKind::Mx => RecordType::MX,
    }
}

fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

#[cfg(test)]
impl LookupMx for crate::mx::tests::StubResolver {
    fn lookup_mx(&self, domain: &str, kind: QueryKind) -> Result<Vec<MxRecord>, ResolveError> {
        self.calls.set(self.calls.get() + 1);
        (self.on_lookup)(domain, kind)
    }
}
