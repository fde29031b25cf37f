use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use wikidoc_cli::cli::commands::generate::{self, GenerateOptions};
use wikidoc_cli::cli::{Args, Command};
use wikidoc_cli::output::{self, OutputConfig};
use wikidoc_cli::source::print_file_types;
use wikidoc_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig { quiet: args.quiet });

    // Values already in the environment win over .env entries. Loaded before
    // tracing so RUST_LOG may come from .env.
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        wikidoc_cli::warn!("{} Ignoring .env file: {e}", Style::warning("Warning:"));
    }

    setup_tracing(args.verbose);

    let result = match args.command {
        Some(Command::Types) => {
            print_file_types();
            Ok(())
        }
        None => {
            let options = GenerateOptions {
                file: args.file,
                model: args.model,
                save: !args.no_save,
            };
            generate::run_generate(options).await
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "invocation failed");
        eprintln!("{} {e}", Style::error("Error:"));
        std::process::exit(e.exit_code());
    }
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wikidoc_cli=warn")),
        1 => EnvFilter::new("wikidoc_cli=debug"),
        _ => EnvFilter::new("wikidoc_cli=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
