//! Validation of the domain typed at the prompt.

use std::sync::LazyLock;

use regex::Regex;

use crate::mx::Error;

/// Labels of word characters joined by `.` or `-`, with at least one dot
/// separating two label groups.
static DOMAIN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\w+([-.]\w+)*\.\w+([-.]\w+)*$").expect("domain regex is valid")
});

/// `true` when `input` is non-blank and looks like a DNS domain.
///
/// The input is matched as-is: surrounding whitespace makes it invalid.
pub fn is_valid_domain(input: &str) -> bool {
    !input.trim().is_empty() && DOMAIN_SHAPE.is_match(input)
}

/// Trim and convert `domain` to its ASCII (punycode) form for the query.
pub fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}
