//! Target tools, their languages, and what each tool can render.
//!
//! The [`Tool::languages`] table is the tool profile: a `(tool, language)`
//! pair outside it is a caller error and never reaches the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::locator::LocatorMethod;
use crate::result::LocatorError;

/// Test-automation tool that generated code targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Selenium WebDriver
    Selenium,
    /// Playwright (role-aware)
    Playwright,
    /// Cypress (test-id driven)
    Cypress,
    /// Appium (WebDriver protocol)
    Appium,
    /// Katalon Studio
    Katalon,
    /// Robot Framework (keyword driven)
    #[serde(rename = "robot")]
    RobotFramework,
}

/// Programming language of the generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgrammingLanguage {
    /// Java
    Java,
    /// Python
    Python,
    /// C#
    CSharp,
    /// JavaScript
    JavaScript,
    /// TypeScript
    TypeScript,
    /// Ruby
    Ruby,
    /// Groovy (Katalon)
    Groovy,
    /// Robot Framework syntax
    Robot,
}

impl Tool {
    /// Every supported tool, in display order
    pub const ALL: [Self; 6] = [
        Self::Selenium,
        Self::Playwright,
        Self::Cypress,
        Self::Appium,
        Self::Katalon,
        Self::RobotFramework,
    ];

    /// Languages this tool can emit code in
    #[must_use]
    pub const fn languages(self) -> &'static [ProgrammingLanguage] {
        use ProgrammingLanguage::{CSharp, Groovy, Java, JavaScript, Python, Robot, Ruby, TypeScript};
        match self {
            Self::Selenium => &[Java, Python, CSharp, JavaScript, Ruby],
            Self::Playwright => &[JavaScript, TypeScript, Python, Java, CSharp],
            Self::Cypress => &[JavaScript, TypeScript],
            Self::Appium => &[Java, Python, JavaScript, CSharp, Ruby],
            Self::Katalon => &[Groovy],
            Self::RobotFramework => &[Robot],
        }
    }

    /// Check the tool profile for a language
    #[must_use]
    pub fn supports_language(self, language: ProgrammingLanguage) -> bool {
        self.languages().contains(&language)
    }

    /// Default language for the tool (first in its profile)
    #[must_use]
    pub const fn default_language(self) -> ProgrammingLanguage {
        self.languages()[0]
    }

    /// Tools with semantic role/label/placeholder/text queries
    #[must_use]
    pub const fn is_role_aware(self) -> bool {
        matches!(self, Self::Playwright)
    }

    /// Tools whose idiom is explicit test-id attributes
    #[must_use]
    pub const fn prefers_test_ids(self) -> bool {
        matches!(self, Self::Cypress)
    }

    /// Tools with a native link-text lookup; the rest get an anchor XPath
    #[must_use]
    pub const fn has_link_text_lookup(self) -> bool {
        !matches!(self, Self::Katalon)
    }

    /// Whether generated code for this tool can use the given method
    #[must_use]
    pub const fn supports(self, method: LocatorMethod) -> bool {
        use LocatorMethod::{Css, Id, Label, LinkText, Name, Placeholder, Role, Text, XPath};
        match method {
            Id | Name | LinkText | Css | XPath => true,
            Role | Placeholder | Text | Label => self.is_role_aware(),
        }
    }

    /// Lower-case identifier used in configuration and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selenium => "selenium",
            Self::Playwright => "playwright",
            Self::Cypress => "cypress",
            Self::Appium => "appium",
            Self::Katalon => "katalon",
            Self::RobotFramework => "robot",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selenium" => Ok(Self::Selenium),
            "playwright" => Ok(Self::Playwright),
            "cypress" => Ok(Self::Cypress),
            "appium" => Ok(Self::Appium),
            "katalon" => Ok(Self::Katalon),
            "robot" | "robotframework" | "robot-framework" => Ok(Self::RobotFramework),
            _ => Err(LocatorError::UnknownTool {
                name: s.to_string(),
            }),
        }
    }
}

impl ProgrammingLanguage {
    /// Lower-case identifier used in configuration and output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Python => "python",
            Self::CSharp => "csharp",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Ruby => "ruby",
            Self::Groovy => "groovy",
            Self::Robot => "robot",
        }
    }

    /// JavaScript or TypeScript
    #[must_use]
    pub const fn is_js_family(self) -> bool {
        matches!(self, Self::JavaScript | Self::TypeScript)
    }
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgrammingLanguage {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "python" | "py" => Ok(Self::Python),
            "csharp" | "c#" | "cs" => Ok(Self::CSharp),
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "ruby" | "rb" => Ok(Self::Ruby),
            "groovy" => Ok(Self::Groovy),
            "robot" => Ok(Self::Robot),
            _ => Err(LocatorError::UnknownLanguage {
                name: s.to_string(),
            }),
        }
    }
}
