use serde::Serialize;

/// One MX answer as returned by the resolver, exchange not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Which DNS question is sent for the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Ask for every record type and keep the MX answers.
    #[default]
    Any,
    /// Plain MX question, for resolvers that refuse ANY.
    Mx,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    Known {
        parent_server: String,
        pattern: String,
        hostname: String,
    },
    #[default]
    Unknown,
}

impl MatchResult {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    pub fn parent_server(&self) -> Option<&str> {
        match self {
            Self::Known { parent_server, .. } => Some(parent_server.as_str()),
            Self::Unknown => None,
        }
    }
}

/// Per-record outcome, in answer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LookupEvent {
    Record { hostname: String },
    Skipped { preference: u16, reason: String },
    Matched { parent_server: String, hostname: String },
}

/// Everything a lookup run found: every usable hostname plus the first
/// known provider, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LookupReport {
    pub domain: String,
    pub records: Vec<String>,
    pub skipped: usize,
    pub provider: MatchResult,
    /// Hostnames that were tested against the known-server list.
    pub match_attempts: usize,
    pub events: Vec<LookupEvent>,
}

impl LookupReport {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }
}
