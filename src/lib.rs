#![forbid(unsafe_code)]
//! mxlookup — résolution MX d'un domaine e-mail et détection des fournisseurs connus

pub mod config;
pub use config::{ConfigError, DEFAULT_SETTINGS_FILE, KnownServerPattern, Settings};

pub mod domain;
pub use domain::{is_valid_domain, normalize_domain};

pub mod mx;
pub use mx::{
    Error as MxLookupError, LookupEvent, LookupReport, MatchResult, MxRecord, QueryKind,
    evaluate_records, match_known_server, perform_mx_lookup,
};
