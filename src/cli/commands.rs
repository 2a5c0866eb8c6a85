use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "simcheck",
    version,
    about = "Character-level document similarity checker",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Bare `simcheck ORIGINAL CANDIDATE OUTPUT` compares without a subcommand
    #[command(flatten)]
    pub compare: CompareArgs,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two documents and write the similarity score
    Compare(CompareArgs),
    /// Compare one original against every file matching a glob
    Batch(BatchArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ReportArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the shared subsequence in json/markdown output
    #[arg(long)]
    pub common: bool,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CompareArgs {
    /// ORIGINAL CANDIDATE OUTPUT (use - as OUTPUT for stdout)
    ///
    /// A first path named like a subcommand (batch, compare, validate) is read
    /// as that subcommand; write `simcheck compare batch ...` or `./batch` instead.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
    /// Original document
    #[arg(short = 'O', long)]
    pub original: PathBuf,

    /// Glob matching candidate documents, e.g. "submissions/*.txt"
    #[arg(long)]
    pub candidates: String,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Max concurrent comparisons (defaults to available parallelism)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_compare_positional() {
        let cli = Cli::try_parse_from(["simcheck", "a.txt", "b.txt", "out.txt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.compare.paths.len(), 3);
    }

    #[test]
    fn test_compare_wrong_count_still_parses() {
        let cli = Cli::try_parse_from(["simcheck", "a.txt"]).unwrap();
        assert_eq!(cli.compare.paths.len(), 1);
    }

    #[test]
    fn test_document_named_like_subcommand() {
        let cli = Cli::try_parse_from(["simcheck", "compare", "batch", "b.txt", "out.txt"]).unwrap();
        match cli.command {
            Some(Commands::Compare(args)) => {
                assert_eq!(args.paths[0], PathBuf::from("batch"));
                assert_eq!(args.paths.len(), 3);
            }
            _ => panic!("expected compare command"),
        }

        let cli = Cli::try_parse_from(["simcheck", "./validate", "b.txt", "out.txt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.compare.paths[0], PathBuf::from("./validate"));
    }

    #[test]
    fn test_bare_subcommand_name_is_not_a_path() {
        // `batch` without its required flags is a batch parse error, not a compare
        assert!(Cli::try_parse_from(["simcheck", "batch", "b.txt", "out.txt"]).is_err());
    }

    #[test]
    fn test_batch_subcommand() {
        let cli = Cli::try_parse_from([
            "simcheck", "batch", "--original", "a.txt", "--candidates", "docs/*.txt",
            "--format", "json", "-j", "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Batch(args)) => {
                assert_eq!(args.candidates, "docs/*.txt");
                assert_eq!(args.jobs, Some(2));
                assert_eq!(args.report.format, Some(OutputFormat::Json));
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_compare_subcommand_with_flags() {
        let cli = Cli::try_parse_from([
            "simcheck", "compare", "-v", "a", "b", "-", "--common", "--format", "markdown",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Commands::Compare(args)) => {
                assert_eq!(args.paths.len(), 3);
                assert!(args.report.common);
                assert_eq!(args.report.format, Some(OutputFormat::Markdown));
            }
            _ => panic!("expected compare command"),
        }
    }
}
