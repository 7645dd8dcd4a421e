use thiserror::Error;

#[derive(Debug, Error)]
pub enum MxLookupError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("'{input}' is not a valid email domain")]
    InvalidDomain { input: String },
    #[error("domain IDNA conversion failed")]
    IdnaConversion {
        #[source]
        source: idna::Errors,
    },
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("failed to retrieve MX records for {domain}: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },
}

impl MxLookupError {
    pub(crate) fn invalid_domain(input: impl Into<String>) -> Self {
        Self::InvalidDomain {
            input: input.into(),
        }
    }

    pub(crate) fn idna(source: idna::Errors) -> Self {
        Self::IdnaConversion { source }
    }

    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn lookup(
        domain: impl Into<String>,
        source: trust_dns_resolver::error::ResolveError,
    ) -> Self {
        Self::Lookup {
            domain: domain.into(),
            source,
        }
    }
}
