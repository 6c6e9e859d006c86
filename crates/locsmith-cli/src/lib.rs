//! Locsmith CLI Library
//!
//! Command-line surface for the locsmith engine: parses markup with
//! `scraper`, runs the analysis and prints locators, groups or page objects.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod html;
pub mod logging;
mod output;
mod runner;

pub use commands::{
    AnalyzeArgs, Cli, ColorArg, Commands, MethodArg, OutputFormatArg, RenderArgs, TargetArgs,
};
pub use config::{engine_config, load_heuristics, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use html::{HtmlElement, HtmlFragment};
pub use output::{render_profiles, OutputFormat, Printer};
pub use runner::{run_analyze, run_render};
