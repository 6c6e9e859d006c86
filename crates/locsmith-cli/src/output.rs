//! Output formatting for analysis results

use console::{style, StyledObject};
use locsmith::{Analysis, Locator, LocatorGroup, Stability, Tool};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl From<crate::commands::OutputFormatArg> for OutputFormat {
    fn from(arg: crate::commands::OutputFormatArg) -> Self {
        match arg {
            crate::commands::OutputFormatArg::Text => Self::Text,
            crate::commands::OutputFormatArg::Json => Self::Json,
        }
    }
}

/// Renders analyses for the terminal
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    use_color: bool,
}

impl Printer {
    /// Create a printer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Render an analysis in the configured format
    pub fn render(&self, analysis: &Analysis) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)? + "\n"),
            OutputFormat::Text => Ok(self.render_text(analysis)),
        }
    }

    fn paint<D>(&self, value: D) -> StyledObject<D> {
        style(value).force_styling(self.use_color)
    }

    fn stability(&self, stability: Stability) -> String {
        let label = format!("[{stability}]");
        let styled = self.paint(label);
        match stability {
            Stability::High => styled.green(),
            Stability::Medium => styled.yellow(),
            Stability::Low => styled.red(),
        }
        .to_string()
    }

    fn render_text(&self, analysis: &Analysis) -> String {
        if analysis.is_empty() {
            return "No locators found.\n".to_string();
        }
        let mut out = String::new();
        match analysis {
            Analysis::Root(locators) => self.push_locators(&mut out, locators),
            Analysis::Groups(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    self.push_group(&mut out, group);
                }
            }
        }
        out
    }

    fn push_group(&self, out: &mut String, group: &LocatorGroup) {
        let marker = if group.is_root() { " (root)" } else { "" };
        let title = format!("{}{marker}", group.element_name());
        out.push_str(&format!("{}\n", self.paint(title).bold()));
        self.push_locators(out, group.locators());
    }

    fn push_locators(&self, out: &mut String, locators: &[Locator]) {
        for (i, locator) in locators.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {} {}\n",
                i + 1,
                self.stability(locator.stability()),
                self.paint(locator.method()).cyan(),
                locator.value()
            ));
            out.push_str(&format!("     {}\n", locator.code_snippet()));
            out.push_str(&format!("     {}\n", self.paint(locator.description()).dim()));
        }
    }
}

/// Tool profile table, one line per tool
#[must_use]
pub fn render_profiles() -> String {
    let mut out = String::new();
    for tool in Tool::ALL {
        let languages: Vec<&str> = tool.languages().iter().map(|l| l.as_str()).collect();
        out.push_str(&format!("{:<12}{}\n", tool.as_str(), languages.join(", ")));
    }
    out
}
