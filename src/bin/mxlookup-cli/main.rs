mod args;
mod console;
mod prompt;

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use mxlookup::{Settings, is_valid_domain, perform_mx_lookup};

use crate::args::Cli;
use crate::console::{Console, LogKind, print_failure, print_json, print_report};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(cli.parsed_log_level()?)
            .with_writer(io::stderr)
            .finish(),
    )
    .context("failed to set tracing subscriber")?;

    let query = cli.parsed_query()?;
    let json = cli.json_output()?;

    // sans la liste des serveurs connus, rien à faire
    let settings = Settings::load(&cli.config).context("cannot load known servers")?;

    // en json, stdout ne porte que le rapport; le dialogue passe par stderr
    let (out, colors): (Box<dyn Write>, bool) = if json {
        let stderr = io::stderr();
        let colors = stderr.is_terminal();
        (Box::new(stderr), colors)
    } else {
        let stdout = io::stdout();
        let colors = stdout.is_terminal();
        (Box::new(stdout), colors)
    };
    let mut console = Console::new(out, colors);
    let mut stdin = io::stdin().lock();

    let domain = match cli.domain.as_deref() {
        Some(d) if is_valid_domain(d) => d.to_string(),
        Some(d) => bail!("invalid --domain '{d}'"),
        None => prompt::read_domain(&mut stdin, &mut console)?,
    };

    console.line(LogKind::Info, &format!("Performing MX lookup on {domain}"))?;

    let report = match perform_mx_lookup(&domain, &settings, query) {
        Ok(report) => report,
        Err(err) => {
            print_failure(&mut console, &domain, &err)?;
            std::process::exit(1);
        }
    };

    if json {
        print_json(&mut io::stdout().lock(), &report)?;
    } else {
        print_report(&mut console, &report)?;
    }

    console.blank()?;
    if cli.no_wait {
        console.line(LogKind::Info, "Process complete.")?;
        console.flush()?;
    } else {
        console.line(LogKind::Info, "Process complete. Press Enter to exit.")?;
        console.flush()?;
        prompt::wait_for_enter(&mut stdin)?;
    }
    Ok(())
}
