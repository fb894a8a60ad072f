#![deny(missing_docs)]

//! # OASDoc CLI
//!
//! Command Line Interface rendering OpenAPI documents to HTML.
//!
//! Supported Commands:
//! - `render`: OpenAPI document -> HTML page (or JSON node tree).
//!
//! Logging goes to stderr and is filtered by `RUST_LOG` (default `warn`).

use clap::{Parser, Subcommand};
use oasdoc_core::AppResult;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI documentation renderer")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an OpenAPI document.
    Render(render::RenderArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> AppResult<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render(args) => render::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_arguments() {
        let cli = Cli::try_parse_from([
            "oasdoc",
            "render",
            "--input",
            "api.yaml",
            "--format",
            "json",
            "--theme",
            "tailwind",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command;
        assert_eq!(args.format, render::OutputFormat::Json);
        assert_eq!(args.theme, oasdoc_core::Theme::Tailwind);
        assert!(args.output.is_none());
    }
}
