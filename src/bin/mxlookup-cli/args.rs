use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use mxlookup::{DEFAULT_SETTINGS_FILE, QueryKind};

#[derive(Parser)]
#[command(name = "mxlookup-cli", version)]
pub struct Cli {
    /// fichier de configuration contenant la liste `knownServers`
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// domaine à interroger (sinon demandé sur stdin)
    #[arg(long)]
    pub domain: Option<String>,

    /// question DNS: any|mx
    #[arg(long, default_value = "any")]
    pub query: String,

    /// format: human|json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// ne pas attendre Entrée avant de quitter
    #[arg(long)]
    pub no_wait: bool,

    /// niveau des logs tracing sur stderr (error|warn|info|debug|trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn parsed_query(&self) -> Result<QueryKind> {
        query_from_str(&self.query)
    }

    pub fn parsed_log_level(&self) -> Result<tracing::Level> {
        match self.log_level.parse() {
            Ok(level) => Ok(level),
            Err(_) => bail!("unknown --log-level '{}'", self.log_level),
        }
    }

    pub fn json_output(&self) -> Result<bool> {
        match self.format.as_str() {
            "human" => Ok(false),
            "json" => Ok(true),
            other => bail!("unknown --format '{other}', use: human|json"),
        }
    }
}

pub fn query_from_str(s: &str) -> Result<QueryKind> {
    match s {
        "any" => Ok(QueryKind::Any),
        "mx" => Ok(QueryKind::Mx),
        other => bail!("unknown --query '{other}', use: any|mx"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["mxlookup-cli"]).expect("parse");
        assert_eq!(cli.config, PathBuf::from("appsettings.json"));
        assert_eq!(cli.parsed_query().unwrap(), QueryKind::Any);
        assert_eq!(cli.parsed_log_level().unwrap(), tracing::Level::WARN);
        assert!(!cli.json_output().unwrap());
        assert!(cli.domain.is_none());
    }

    #[test]
    fn explicit_options() {
        let cli = Cli::try_parse_from([
            "mxlookup-cli",
            "--config",
            "/etc/mxlookup.json",
            "--domain",
            "gmail.com",
            "--query",
            "mx",
            "--format",
            "json",
            "--no-wait",
        ])
        .expect("parse");
        assert_eq!(cli.domain.as_deref(), Some("gmail.com"));
        assert_eq!(cli.parsed_query().unwrap(), QueryKind::Mx);
        assert!(cli.json_output().unwrap());
        assert!(cli.no_wait);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(query_from_str("txt").is_err());
        let cli = Cli::try_parse_from(["mxlookup-cli", "--format", "csv", "--log-level", "loud"])
            .expect("parse");
        assert!(cli.json_output().is_err());
        assert!(cli.parsed_log_level().is_err());
    }
}
