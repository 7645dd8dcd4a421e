//! MX resolution and known mail provider detection.
//!
//! The public entry point is [`perform_mx_lookup`], which performs a single
//! synchronous query using the system resolver and returns a
//! [`LookupReport`]. [`evaluate_records`] holds the matching pass on its own
//! so it can run against records obtained elsewhere.

mod error;
mod matcher;
mod resolver;
mod types;

pub use error::MxLookupError as Error;
pub use matcher::{evaluate_records, match_known_server};
pub use resolver::perform_mx_lookup;
pub use types::{LookupEvent, LookupReport, MatchResult, MxRecord, QueryKind};
