use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use mxlookup::{LookupEvent, LookupReport, MxLookupError};

/// Category of a console line, each with its own colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Success,
    Info,
    Log,
    Warning,
    Error,
}

impl LogKind {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Success => text.cyan(),
            Self::Info => text.green(),
            Self::Log => text.white(),
            Self::Warning => text.yellow(),
            Self::Error => text.red(),
        }
    }
}

pub struct Console<W: Write> {
    out: W,
    colors: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self { out, colors }
    }

    pub fn line(&mut self, kind: LogKind, text: &str) -> io::Result<()> {
        if self.colors {
            writeln!(self.out, "{}", kind.paint(text))
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Console lines describing `report`, in the order the records were seen.
pub fn report_lines(report: &LookupReport) -> Vec<(LogKind, String)> {
    let mut lines = Vec::new();
    for event in &report.events {
        match event {
            LookupEvent::Record { hostname } => lines.push((LogKind::Log, hostname.clone())),
            LookupEvent::Skipped { preference, reason } => {
                lines.push((LogKind::Warning, format!("{reason} (preference {preference})")))
            }
            LookupEvent::Matched { parent_server, .. } => {
                lines.push((LogKind::Success, format!("Domain match found: {parent_server}")))
            }
        }
    }

    if !report.has_records() {
        lines.push((
            LogKind::Warning,
            format!("No MX records found for {}", report.domain),
        ));
    } else if !report.provider.is_known() {
        lines.push((LogKind::Info, "No known server matched".to_string()));
    }
    lines
}

pub fn print_report<W: Write>(console: &mut Console<W>, report: &LookupReport) -> io::Result<()> {
    for (kind, text) in report_lines(report) {
        console.line(kind, &text)?;
    }
    Ok(())
}

/// Red error line for a failed lookup. Only the console shows it; the
/// tracing event stays at debug so the default log level does not repeat it.
pub fn print_failure<W: Write>(
    console: &mut Console<W>,
    domain: &str,
    err: &MxLookupError,
) -> io::Result<()> {
    tracing::debug!(domain, error = ?err, "MX lookup failed");
    console.line(
        LogKind::Error,
        &format!("ERROR: Failed to retrieve MX Record - {err}"),
    )?;
    console.flush()
}

/// The report alone, as pretty JSON followed by a newline.
pub fn print_json<W: Write>(out: &mut W, report: &LookupReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
