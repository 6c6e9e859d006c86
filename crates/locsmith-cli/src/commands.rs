//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use locsmith::{Locale, LocatorMethod, ProgrammingLanguage, Tool};
use std::path::PathBuf;

/// Locsmith: ranked element locators for UI test automation
#[derive(Parser, Debug)]
#[command(name = "locsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a markup snippet and print ranked locators
    Analyze(AnalyzeArgs),

    /// Render one locator for a tool and language
    Render(RenderArgs),

    /// List tools and the languages each one supports
    Profiles,
}

/// Tool and language selection shared by subcommands
#[derive(Parser, Debug, Clone)]
pub struct TargetArgs {
    /// Target tool (selenium, playwright, cypress, appium, katalon, robot)
    #[arg(short, long, env = "LOCSMITH_TOOL", default_value = "selenium")]
    pub tool: Tool,

    /// Target language; defaults to the tool's first language
    #[arg(short, long, env = "LOCSMITH_LANGUAGE")]
    pub language: Option<ProgrammingLanguage>,
}

/// Arguments for the analyze command
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Markup file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Tool and language
    #[command(flatten)]
    pub target: TargetArgs,

    /// Analyze interactive and content descendants, grouped by element
    #[arg(short, long)]
    pub deep_scan: bool,

    /// Language of locator descriptions (en, vi)
    #[arg(long, env = "LOCSMITH_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// YAML file overriding heuristic thresholds
    #[arg(long)]
    pub heuristics: Option<PathBuf>,

    /// Keep only groups and locators matching this text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormatArg,

    /// Print a page object instead of the locator list
    #[arg(long)]
    pub pom: bool,

    /// Class name for the page object
    #[arg(long, default_value = locsmith::page_object::DEFAULT_CLASS_NAME)]
    pub class_name: String,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Locator method
    pub method: MethodArg,

    /// Locator value (id without `#`, selector, expression or text)
    pub value: String,

    /// Tool and language
    #[command(flatten)]
    pub target: TargetArgs,

    /// Accessible role, for role locators
    #[arg(long)]
    pub role: Option<String>,

    /// Accessible name, for role locators
    #[arg(long)]
    pub name: Option<String>,
}

/// Locator method argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MethodArg {
    /// Element id
    Id,
    /// `name` attribute
    Name,
    /// Anchor text
    #[value(name = "link-text")]
    LinkText,
    /// CSS selector
    Css,
    /// XPath expression
    Xpath,
    /// Accessible role
    Role,
    /// Label text
    Label,
    /// Placeholder text
    Placeholder,
    /// Visible text
    Text,
}

impl From<MethodArg> for LocatorMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Id => Self::Id,
            MethodArg::Name => Self::Name,
            MethodArg::LinkText => Self::LinkText,
            MethodArg::Css => Self::Css,
            MethodArg::Xpath => Self::XPath,
            MethodArg::Role => Self::Role,
            MethodArg::Label => Self::Label,
            MethodArg::Placeholder => Self::Placeholder,
            MethodArg::Text => Self::Text,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Color choice argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Auto-detect
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
