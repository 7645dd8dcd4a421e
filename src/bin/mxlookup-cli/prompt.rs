use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use mxlookup::is_valid_domain;

use crate::console::{Console, LogKind};

/// Ask for a domain until a valid one is typed. There is no retry cap; only
/// end of input stops the loop early.
pub fn read_domain<R, W>(input: &mut R, console: &mut Console<W>) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        console.line(
            LogKind::Info,
            "Enter the email domain that you wish to perform an MX lookup on:",
        )?;
        console.line(LogKind::Log, "Example: gmail.com")?;
        console.blank()?;
        console.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("read stdin")?;
        if read == 0 {
            bail!("standard input closed before a valid domain was entered");
        }

        let candidate = line.trim_end_matches(['\r', '\n']);
        console.blank()?;
        if is_valid_domain(candidate) {
            return Ok(candidate.to_string());
        }
        tracing::debug!(input = candidate, "rejected domain input");
        console.line(LogKind::Warning, "Invalid domain input")?;
    }
}

/// Block until a line (or end of input) arrives.
pub fn wait_for_enter<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line).context("read stdin")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reprompts_until_valid_domain() {
        let mut input = Cursor::new("\n   \nlocalhost\nGmail.COM\nignored.com\n");
        let mut console = Console::new(Vec::new(), false);
        let domain = read_domain(&mut input, &mut console).expect("valid domain");
        assert_eq!(domain, "Gmail.COM");

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(out.matches("Invalid domain input").count(), 3);
        assert_eq!(out.matches("Example: gmail.com").count(), 4);
    }

    #[test]
    fn accepts_crlf_terminated_input() {
        let mut input = Cursor::new("example.org\r\n");
        let mut console = Console::new(Vec::new(), false);
        assert_eq!(read_domain(&mut input, &mut console).unwrap(), "example.org");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut input = Cursor::new("not valid\n");
        let mut console = Console::new(Vec::new(), false);
        let err = read_domain(&mut input, &mut console).expect_err("eof");
        assert!(err.to_string().contains("standard input closed"));
    }

    #[test]
    fn wait_for_enter_tolerates_eof() {
        let mut input = Cursor::new("");
        assert!(wait_for_enter(&mut input).is_ok());
    }
}
