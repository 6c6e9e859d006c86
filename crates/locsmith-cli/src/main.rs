//! Locsmith CLI: ranked element locators from a markup snippet
//!
//! ## Usage
//!
//! ```bash
//! locsmith analyze login.html                          # Root element, Selenium/Java
//! locsmith analyze login.html -t playwright -l ts -d   # Deep scan, grouped
//! locsmith analyze login.html -d --pom --class-name LoginPage
//! echo '<a href="/x">Go</a>' | locsmith analyze --format json
//! locsmith render id submit-btn -t selenium -l python
//! locsmith profiles
//! ```

use clap::Parser;
use locsmith_cli::{
    logging, render_profiles, run_analyze, run_render, Cli, CliConfig, CliResult, ColorChoice,
    Commands, Verbosity,
};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);

    let output = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &config)?,
        Commands::Render(args) => run_render(args)?,
        Commands::Profiles => render_profiles(),
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
}
