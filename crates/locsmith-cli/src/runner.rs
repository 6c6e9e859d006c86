//! Subcommand execution

use std::io::Read;
use std::path::Path;

use locsmith::formatter::{render, RoleHint};
use locsmith::{LocatorEngine, LocatorMethod};

use crate::commands::{AnalyzeArgs, RenderArgs};
use crate::config::{engine_config, load_heuristics, CliConfig};
use crate::error::{CliError, CliResult};
use crate::html::HtmlFragment;
use crate::output::Printer;

/// Read markup from a file, or from stdin for `None` / `-`
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut buf = String::new();
            let _ = std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Run `analyze` over already-read markup and return the text to print
pub fn analyze_markup(markup: &str, args: &AnalyzeArgs, cli: &CliConfig) -> CliResult<String> {
    if markup.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    if args.class_name.trim().is_empty() {
        return Err(CliError::invalid_argument("--class-name must not be empty"));
    }

    let heuristics = args.heuristics.as_deref().map(load_heuristics).transpose()?;
    let config = engine_config(
        args.target.tool,
        args.target.language,
        args.deep_scan,
        args.locale,
        heuristics,
    )?;

    let fragment = HtmlFragment::parse(markup);
    if !fragment.has_elements() {
        return Err(CliError::NoElement);
    }

    let engine = LocatorEngine::new(config);
    let mut analysis = engine.analyze(&fragment.container());
    tracing::info!(locators = analysis.len(), "analysis complete");
    if let Some(query) = args.filter.as_deref() {
        analysis = analysis.filter(query);
        tracing::info!(query, locators = analysis.len(), "filter applied");
    }

    if args.pom {
        return Ok(engine.page_object(&analysis, args.class_name.trim()));
    }
    Printer::new(args.format.into(), cli.color.should_color()).render(&analysis)
}

/// Run the `analyze` subcommand
pub fn run_analyze(args: &AnalyzeArgs, cli: &CliConfig) -> CliResult<String> {
    let markup = read_input(args.input.as_deref())?;
    analyze_markup(&markup, args, cli)
}

/// Run the `render` subcommand
pub fn run_render(args: &RenderArgs) -> CliResult<String> {
    let tool = args.target.tool;
    let language = args.target.language.unwrap_or_else(|| tool.default_language());
    if !tool.supports_language(language) {
        return Err(locsmith::LocatorError::unsupported_language(tool, language).into());
    }
    let method = LocatorMethod::from(args.method);
    if !tool.supports(method) {
        return Err(CliError::invalid_argument(format!("{tool} cannot render {method} locators")));
    }

    let role = match (method, args.role.as_deref()) {
        (LocatorMethod::Role, Some(role)) => Some(RoleHint::new(role, args.name.as_deref())),
        (LocatorMethod::Role, None) => {
            return Err(CliError::invalid_argument("role locators need --role"));
        }
        _ => None,
    };
    Ok(render(method, &args.value, tool, language, role.as_ref()) + "\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    fn analyze_args(extra: &[&str]) -> AnalyzeArgs {
        let mut argv = vec!["locsmith", "analyze"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Analyze(args) => args,
            _ => panic!("expected analyze"),
        }
    }

    fn render_args(extra: &[&str]) -> RenderArgs {
        let mut argv = vec!["locsmith", "render"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Render(args) => args,
            _ => panic!("expected render"),
        }
    }

    mod analyze_tests {
        use super::*;

        #[test]
        fn test_text_output() {
            let out = analyze_markup(
                "<button id=\"submit-btn\">Login</button>",
                &analyze_args(&["--tool", "selenium", "--language", "java"]),
                &CliConfig::new(),
            )
            .unwrap();
            assert!(out.contains("driver.findElement(By.id(\"submit-btn\"));"));
        }

        #[test]
        fn test_json_output() {
            let out = analyze_markup(
                "<a href=\"/x\">Continue</a>",
                &analyze_args(&["--format", "json"]),
                &CliConfig::new(),
            )
            .unwrap();
            let value: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert_eq!(value["mode"], "root");
        }

        #[test]
        fn test_page_object_output() {
            let out = analyze_markup(
                "<form id=\"login\"><input id=\"user\" type=\"text\"></form>",
                &analyze_args(&[
                    "--tool", "selenium", "--language", "python", "--deep-scan", "--pom",
                    "--class-name", "LoginPage",
                ]),
                &CliConfig::new(),
            )
            .unwrap();
            assert!(out.contains("class LoginPage:"));
            assert!(out.contains("TEXT_INPUT_USER = (By.ID, \"user\")"));
        }

        #[test]
        fn test_filter() {
            let out = analyze_markup(
                "<div><a href=\"/a\">Alpha</a><a href=\"/b\">Beta</a></div>",
                &analyze_args(&["--deep-scan", "--filter", "/b"]),
                &CliConfig::new(),
            )
            .unwrap();
            assert!(out.contains("Beta"));
            assert!(!out.contains("Alpha"));
        }

        #[test]
        fn test_empty_and_textless_input() {
            let args = analyze_args(&[]);
            assert!(matches!(
                analyze_markup("  \n", &args, &CliConfig::new()),
                Err(CliError::EmptyInput)
            ));
            assert!(matches!(
                analyze_markup("plain words", &args, &CliConfig::new()),
                Err(CliError::NoElement)
            ));
        }

        #[test]
        fn test_unsupported_pair() {
            let err = analyze_markup(
                "<a>x</a>",
                &analyze_args(&["--tool", "cypress", "--language", "java"]),
                &CliConfig::new(),
            )
            .unwrap_err();
            assert!(matches!(err, CliError::Locator(_)));
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_render_id() {
            let out = render_args(&["id", "submit-btn", "--tool", "selenium", "--language", "python"]);
            assert_eq!(run_render(&out).unwrap(), "driver.find_element(By.ID, \"submit-btn\")\n");
        }

        #[test]
        fn test_render_role() {
            let args = render_args(&[
                "role", "-", "--tool", "playwright", "--language", "python", "--role", "button",
                "--name", "Login",
            ]);
            assert_eq!(
                run_render(&args).unwrap(),
                "page.get_by_role(\"button\", name=\"Login\")\n"
            );
        }

        #[test]
        fn test_role_needs_hint() {
            let args = render_args(&["role", "-", "--tool", "playwright"]);
            assert!(matches!(run_render(&args), Err(CliError::InvalidArgument { .. })));
        }

        #[test]
        fn test_unrenderable_method() {
            let args = render_args(&["placeholder", "Search", "--tool", "selenium"]);
            assert!(matches!(run_render(&args), Err(CliError::InvalidArgument { .. })));
        }
    }
}
