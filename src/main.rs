use clap::Parser;
use simcheck::cli::{self, Commands};
use simcheck::config;
use simcheck::errors::SimcheckError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.log_json {
        builder.json().init();
    } else {
        builder.with_ansi(!cli.no_color).init();
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = option_env!("GIT_HASH").unwrap_or("dev"),
        built = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        "simcheck starting"
    );

    let result = match cli.command {
        Some(Commands::Compare(args)) => cli::compare::handle_compare(args).await,
        Some(Commands::Batch(args)) => cli::batch::handle_batch(args).await,
        Some(Commands::Validate(args)) => handle_validate(args).await,
        None => cli::compare::handle_compare(cli.compare).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let classification = e.classify();
        tracing::debug!(error_type = classification.error_type, "Exiting with error");
        std::process::exit(classification.exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), SimcheckError> {
    let config = config::parse_config(&args.config).await?;
    let filter = match &config.filter {
        Some(f) => config::build_filter(f)?,
        None => Default::default(),
    };
    println!("Configuration is valid: {}", args.config.display());
    println!("  significant symbols: {}", filter.describe());
    Ok(())
}
