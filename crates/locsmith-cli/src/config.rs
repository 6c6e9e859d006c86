//! CLI configuration

use std::path::Path;

use locsmith::{EngineConfig, Heuristics, Locale, ProgrammingLanguage, Tool};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - progress events
    Verbose,
    /// Debug - per-element events
    Debug,
    /// Trace - everything, including skipped nodes
    Trace,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
}

impl CliConfig {
    /// Create a new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

/// Load and validate a heuristics override file
pub fn load_heuristics(path: &Path) -> CliResult<Heuristics> {
    let text = std::fs::read_to_string(path)?;
    let heuristics: Heuristics = serde_yaml_ng::from_str(&text)?;
    heuristics
        .validate()
        .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?;
    Ok(heuristics)
}

/// Build the engine configuration, rejecting pairs outside the tool profile
pub fn engine_config(
    tool: Tool,
    language: Option<ProgrammingLanguage>,
    deep_scan: bool,
    locale: Locale,
    heuristics: Option<Heuristics>,
) -> CliResult<EngineConfig> {
    let language = language.unwrap_or_else(|| tool.default_language());
    let config = EngineConfig::new(tool, language)?
        .with_deep_scan(deep_scan)
        .with_locale(locale);
    Ok(match heuristics {
        Some(h) => config.with_heuristics(h),
        None => config,
    })
}
