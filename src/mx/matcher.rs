use crate::config::KnownServerPattern;

use super::{LookupEvent, LookupReport, MatchResult, MxRecord};

/// First entry of `patterns` whose pattern occurs anywhere in `hostname`,
/// ignoring case. The pattern is used as configured; an empty one never
/// matches.
pub fn match_known_server<'a>(
    hostname: &str,
    patterns: &'a [KnownServerPattern],
) -> Option<&'a KnownServerPattern> {
    let host = hostname.to_lowercase();
    patterns.iter().find(|known| {
        !known.pattern.is_empty() && host.contains(&known.pattern.to_lowercase())
    })
}

/// Walk the MX answers in order, collecting hostnames and stopping the
/// known-server search at the first hit.
pub fn evaluate_records(
    domain: &str,
    records: &[MxRecord],
    patterns: &[KnownServerPattern],
) -> LookupReport {
    let mut report = LookupReport::new(domain);

    for record in records {
        let hostname = normalize_exchange(&record.exchange);
        if hostname.is_empty() {
            tracing::warn!(domain, preference = record.preference, "MX record exchange is empty");
            report.skipped += 1;
            report.events.push(LookupEvent::Skipped {
                preference: record.preference,
                reason: "MX record exchange is empty".to_string(),
            });
            continue;
        }

        tracing::info!(domain, preference = record.preference, %hostname, "MX record");
        report.events.push(LookupEvent::Record {
            hostname: hostname.to_string(),
        });

        if !report.provider.is_known() {
            report.match_attempts += 1;
            if let Some(known) = match_known_server(hostname, patterns) {
                tracing::info!(
                    domain,
                    %hostname,
                    parent_server = %known.parent_server,
                    "known server matched"
                );
                report.events.push(LookupEvent::Matched {
                    parent_server: known.parent_server.clone(),
                    hostname: hostname.to_string(),
                });
                report.provider = MatchResult::Known {
                    parent_server: known.parent_server.clone(),
                    pattern: known.pattern.clone(),
                    hostname: hostname.to_string(),
                };
            }
        }

        report.records.push(hostname.to_string());
    }

    report
}

/// Trim whitespace and the trailing root dot; the root name `.` becomes empty.
pub(crate) fn normalize_exchange(exchange: &str) -> &str {
    exchange.trim().trim_end_matches('.')
}
