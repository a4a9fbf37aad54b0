use crate::core::report::OutputFormat;
use crate::domain::model::SourceKind;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliArgs {
    /// Path to a TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Override the language list, e.g. --languages python,rust
    #[arg(long, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Only query the given sources (headhunter, superjob)
    #[arg(long = "source")]
    pub sources: Vec<SourceKind>,

    /// Keep identical vacancies that appear on several pages
    #[arg(long)]
    pub no_dedup: bool,

    /// Show the resolved configuration without making requests
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_valid() {
        let args = CliArgs::try_parse_from(["vacancy-stats"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.sources.is_empty());
        assert!(!args.no_dedup);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let args = CliArgs::try_parse_from([
            "vacancy-stats",
            "--languages",
            "python,rust",
            "--source",
            "hh",
            "--format",
            "csv",
            "--no-dedup",
        ])
        .unwrap();

        assert_eq!(
            args.languages,
            Some(vec!["python".to_string(), "rust".to_string()])
        );
        assert_eq!(args.sources, vec![SourceKind::HeadHunter]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(args.no_dedup);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        assert!(CliArgs::try_parse_from(["vacancy-stats", "--source", "rabota"]).is_err());
    }
}
