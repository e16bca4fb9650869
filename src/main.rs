//! siteconf - typed settings store for static site builds.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    siteconf::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check { strict } => cli::check::run(&cli, *strict),
        Commands::Show { format } => cli::show::run(&cli, *format),
        Commands::Paths => cli::paths::run(&cli),
        Commands::Init { name, dry } => cli::init::new_site(&cli.config, name.as_deref(), *dry),
    }
}
