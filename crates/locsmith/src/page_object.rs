//! Page Object Model emission.
//!
//! Turns one representative locator per element into a page-object source
//! unit for the target tool and language. Emission is textual: nothing is
//! checked against a live page.
//!
//! # Example
//!
//! ```
//! use locsmith::page_object::PageObjectBuilder;
//! use locsmith::{Locator, LocatorMethod, ProgrammingLanguage, Tool};
//!
//! let login = Locator::new(LocatorMethod::Id, "#login")
//!     .with_element_name("Button \"Login\"")
//!     .with_code_snippet("driver.find_element(By.ID, \"login\")");
//! let source = PageObjectBuilder::new(Tool::Selenium, ProgrammingLanguage::Python)
//!     .with_locator(login)
//!     .emit();
//! assert!(source.contains("BUTTON_LOGIN = (By.ID, \"login\")"));
//! ```

use std::collections::HashSet;

use crate::formatter::render;
use crate::locator::{Locator, LocatorMethod};
use crate::tool::{ProgrammingLanguage, Tool};

/// Class name used when none is given
pub const DEFAULT_CLASS_NAME: &str = "MyPage";

const INDENT: &str = "    ";

/// Identifier case convention of a target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    /// `login_button`
    Snake,
    /// `loginButton`
    Camel,
    /// `LoginButton`
    Pascal,
}

impl NameCase {
    /// Convention used for members in `language`
    #[must_use]
    pub const fn for_language(language: ProgrammingLanguage) -> Self {
        match language {
            ProgrammingLanguage::Python | ProgrammingLanguage::Ruby | ProgrammingLanguage::Robot => {
                Self::Snake
            }
            ProgrammingLanguage::CSharp => Self::Pascal,
            _ => Self::Camel,
        }
    }

    /// Convert a free-form label to an identifier
    #[must_use]
    pub fn apply(self, label: &str) -> String {
        let words = words_of(label);
        match self {
            Self::Snake => words.join("_"),
            Self::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
                .collect(),
            Self::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        }
    }
}

/// Lower-cased words of a label, split on non-alphanumerics and camel humps
///
/// A label that starts with a digit is prefixed with `element`.
fn words_of(label: &str) -> Vec<String> {
    let cleaned: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let mut words: Vec<String> = cleaned.split_whitespace().flat_map(split_humps).collect();
    if words.is_empty() {
        words.push("element".to_string());
    } else if words[0].starts_with(|c: char| c.is_ascii_digit()) {
        words.insert(0, "element".to_string());
    }
    words
}

/// `loginButton` → `login`, `button`; `HTMLInput` → `html`, `input`
fn split_humps(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary && !current.is_empty() {
                out.push(current.to_ascii_lowercase());
                current.clear();
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current.to_ascii_lowercase());
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hands out collision-free identifiers for one emission
#[derive(Debug, Default)]
pub struct VariableNamer {
    used: HashSet<String>,
}

impl VariableNamer {
    /// Empty namer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `base`, then `base2`, `base3`, ...
    pub fn unique(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut counter = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{base}{counter}");
            counter += 1;
        }
        let _ = self.used.insert(candidate.clone());
        candidate
    }
}

/// One page-object member: identifier plus the locator behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageField {
    /// Identifier in the language's case convention
    pub name: String,
    /// Source locator
    pub locator: Locator,
}

/// Builder for page-object source
#[derive(Debug, Clone)]
pub struct PageObjectBuilder {
    tool: Tool,
    language: ProgrammingLanguage,
    class_name: String,
    locators: Vec<Locator>,
}

impl PageObjectBuilder {
    /// Builder for one tool and language
    #[must_use]
    pub fn new(tool: Tool, language: ProgrammingLanguage) -> Self {
        Self {
            tool,
            language,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            locators: Vec::new(),
        }
    }

    /// Set the class name
    #[must_use]
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Add a locator
    #[must_use]
    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locators.push(locator);
        self
    }

    /// Add several locators
    #[must_use]
    pub fn with_locators(mut self, locators: impl IntoIterator<Item = Locator>) -> Self {
        self.locators.extend(locators);
        self
    }

    /// Name every locator; names are unique across the emission
    #[must_use]
    pub fn fields(&self) -> Vec<PageField> {
        let case = NameCase::for_language(self.language);
        let mut namer = VariableNamer::new();
        self.locators
            .iter()
            .map(|locator| {
                let label = locator.element_name().unwrap_or("element");
                PageField {
                    name: namer.unique(&case.apply(label)),
                    locator: locator.clone(),
                }
            })
            .collect()
    }

    /// Render the source unit
    #[must_use]
    pub fn emit(&self) -> String {
        let fields = self.fields();
        let lines = match self.tool {
            Tool::Playwright => self.playwright(&fields),
            Tool::Cypress => self.cypress(&fields),
            Tool::Katalon => self.katalon(&fields),
            Tool::RobotFramework => robot(&fields),
            Tool::Selenium | Tool::Appium => self.webdriver(&fields),
        };
        let mut source = lines.join("\n");
        source.push('\n');
        source
    }

    /// `By` expression for WebDriver members, re-rendered as XPath when the
    /// snippet has an unexpected shape
    fn by_expression(&self, locator: &Locator) -> String {
        let extract = |code: &str| -> Option<String> {
            let inner = match self.language {
                ProgrammingLanguage::Java => code
                    .strip_prefix("driver.findElement(")?
                    .strip_suffix(");")?
                    .to_string(),
                ProgrammingLanguage::CSharp => code
                    .strip_prefix("driver.FindElement(")?
                    .strip_suffix(");")?
                    .to_string(),
                ProgrammingLanguage::JavaScript | ProgrammingLanguage::TypeScript => code
                    .strip_prefix("await driver.findElement(")?
                    .strip_suffix(");")?
                    .to_string(),
                ProgrammingLanguage::Python => format!(
                    "({})",
                    code.strip_prefix("driver.find_element(")?.strip_suffix(')')?
                ),
                ProgrammingLanguage::Ruby => format!(
                    "{{ {} }}",
                    code.strip_prefix("driver.find_element(")?.strip_suffix(')')?
                ),
                ProgrammingLanguage::Groovy | ProgrammingLanguage::Robot => return None,
            };
            Some(inner)
        };
        extract(locator.code_snippet())
            .or_else(|| {
                let xpath = render(LocatorMethod::XPath, locator.value(), self.tool, self.language, None);
                extract(&xpath)
            })
            .unwrap_or_else(|| locator.value().to_string())
    }

    fn webdriver(&self, fields: &[PageField]) -> Vec<String> {
        let class = &self.class_name;
        let mut lines = Vec::new();
        match self.language {
            ProgrammingLanguage::Java => {
                lines.push("import org.openqa.selenium.By;".to_string());
                lines.push("import org.openqa.selenium.WebDriver;".to_string());
                lines.push(String::new());
                lines.push(format!("public class {class} {{"));
                lines.push(format!("{INDENT}private final WebDriver driver;"));
                lines.push(String::new());
                for field in fields {
                    let by = self.by_expression(&field.locator);
                    lines.push(format!("{INDENT}private final By {} = {by};", field.name));
                }
                lines.push(String::new());
                lines.push(format!("{INDENT}public {class}(WebDriver driver) {{"));
                lines.push(format!("{INDENT}{INDENT}this.driver = driver;"));
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
            }
            ProgrammingLanguage::CSharp => {
                lines.push("using OpenQA.Selenium;".to_string());
                lines.push(String::new());
                lines.push(format!("public class {class}"));
                lines.push("{".to_string());
                lines.push(format!("{INDENT}private readonly IWebDriver driver;"));
                lines.push(String::new());
                for field in fields {
                    let by = self.by_expression(&field.locator);
                    lines.push(format!("{INDENT}private readonly By {} = {by};", field.name));
                }
                lines.push(String::new());
                lines.push(format!("{INDENT}public {class}(IWebDriver driver)"));
                lines.push(format!("{INDENT}{{"));
                lines.push(format!("{INDENT}{INDENT}this.driver = driver;"));
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
            }
            ProgrammingLanguage::Python => {
                lines.push("from selenium.webdriver.common.by import By".to_string());
                lines.push(String::new());
                lines.push(String::new());
                lines.push(format!("class {class}:"));
                for field in fields {
                    let by = self.by_expression(&field.locator);
                    lines.push(format!("{INDENT}{} = {by}", field.name.to_ascii_uppercase()));
                }
                if !fields.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("{INDENT}def __init__(self, driver):"));
                lines.push(format!("{INDENT}{INDENT}self.driver = driver"));
            }
            ProgrammingLanguage::Ruby => {
                lines.push(format!("class {class}"));
                for field in fields {
                    let by = self.by_expression(&field.locator);
                    lines.push(format!("  {} = {by}.freeze", field.name.to_ascii_uppercase()));
                }
                if !fields.is_empty() {
                    lines.push(String::new());
                }
                lines.push("  def initialize(driver)".to_string());
                lines.push("    @driver = driver".to_string());
                lines.push("  end".to_string());
                lines.push("end".to_string());
            }
            ProgrammingLanguage::TypeScript => {
                lines.push("import { By, WebDriver } from 'selenium-webdriver';".to_string());
                lines.push(String::new());
                lines.push(format!("export class {class} {{"));
                for field in fields {
                    let by = self.by_expression(&field.locator);
                    lines.push(format!("{INDENT}readonly {} = {by};", field.name));
                }
                if !fields.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("{INDENT}constructor(private readonly driver: WebDriver) {{}}"));
                lines.push("}".to_string());
            }
            _ => {
                lines.push("const { By } = require('selenium-webdriver');".to_string());
                lines.push(String::new());
                lines.push(format!("class {class} {{"));
                lines.push(format!("{INDENT}constructor(driver) {{"));
                lines.push(format!("{INDENT}{INDENT}this.driver = driver;"));
                for field in fields {
                    let by = self.by_expression(&field.locator);
                    lines.push(format!("{INDENT}{INDENT}this.{} = {by};", field.name));
                }
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
                lines.push(String::new());
                lines.push(format!("module.exports = {{ {class} }};"));
            }
        }
        lines
    }

    /// Locator expression for a Playwright member; falls back to a CSS
    /// locator over the raw value when the snippet is not a page query
    fn playwright_expression(&self, locator: &Locator) -> String {
        let code = locator.code_snippet();
        if code.starts_with("page.") || code.starts_with("Page.") {
            code.to_string()
        } else {
            render(LocatorMethod::Css, locator.value(), self.tool, self.language, None)
        }
    }

    fn playwright(&self, fields: &[PageField]) -> Vec<String> {
        let class = &self.class_name;
        let mut lines = Vec::new();
        let assignments: Vec<(String, String)> = fields
            .iter()
            .map(|f| (f.name.clone(), self.playwright_expression(&f.locator)))
            .collect();
        match self.language {
            ProgrammingLanguage::Python => {
                lines.push("from playwright.sync_api import Page".to_string());
                lines.push(String::new());
                lines.push(String::new());
                lines.push(format!("class {class}:"));
                lines.push(format!("{INDENT}def __init__(self, page: Page):"));
                lines.push(format!("{INDENT}{INDENT}self.page = page"));
                for (name, code) in &assignments {
                    lines.push(format!("{INDENT}{INDENT}self.{name} = {code}"));
                }
            }
            ProgrammingLanguage::Java => {
                lines.push("import com.microsoft.playwright.Locator;".to_string());
                lines.push("import com.microsoft.playwright.Page;".to_string());
                lines.push("import com.microsoft.playwright.options.AriaRole;".to_string());
                lines.push(String::new());
                lines.push(format!("public class {class} {{"));
                lines.push(format!("{INDENT}private final Page page;"));
                for (name, _) in &assignments {
                    lines.push(format!("{INDENT}private final Locator {name};"));
                }
                lines.push(String::new());
                lines.push(format!("{INDENT}public {class}(Page page) {{"));
                lines.push(format!("{INDENT}{INDENT}this.page = page;"));
                for (name, code) in &assignments {
                    lines.push(format!("{INDENT}{INDENT}this.{name} = {code};"));
                }
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
            }
            ProgrammingLanguage::CSharp => {
                lines.push("using Microsoft.Playwright;".to_string());
                lines.push(String::new());
                lines.push(format!("public class {class}"));
                lines.push("{".to_string());
                lines.push(format!("{INDENT}private readonly IPage Page;"));
                for (name, _) in &assignments {
                    lines.push(format!("{INDENT}public ILocator {name} {{ get; }}"));
                }
                lines.push(String::new());
                lines.push(format!("{INDENT}public {class}(IPage page)"));
                lines.push(format!("{INDENT}{{"));
                lines.push(format!("{INDENT}{INDENT}Page = page;"));
                for (name, code) in &assignments {
                    lines.push(format!("{INDENT}{INDENT}{name} = {code};"));
                }
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
            }
            ProgrammingLanguage::TypeScript => {
                lines.push("import { Page, Locator } from '@playwright/test';".to_string());
                lines.push(String::new());
                lines.push(format!("export class {class} {{"));
                lines.push(format!("{INDENT}readonly page: Page;"));
                for (name, _) in &assignments {
                    lines.push(format!("{INDENT}readonly {name}: Locator;"));
                }
                lines.push(String::new());
                lines.push(format!("{INDENT}constructor(page: Page) {{"));
                lines.push(format!("{INDENT}{INDENT}this.page = page;"));
                for (name, code) in &assignments {
                    lines.push(format!("{INDENT}{INDENT}this.{name} = {code};"));
                }
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
            }
            _ => {
                lines.push(format!("export class {class} {{"));
                lines.push(format!("{INDENT}/** @param {{import('@playwright/test').Page}} page */"));
                lines.push(format!("{INDENT}constructor(page) {{"));
                lines.push(format!("{INDENT}{INDENT}this.page = page;"));
                for (name, code) in &assignments {
                    lines.push(format!("{INDENT}{INDENT}this.{name} = {code};"));
                }
                lines.push(format!("{INDENT}}}"));
                lines.push("}".to_string());
            }
        }
        lines
    }

    fn cypress(&self, fields: &[PageField]) -> Vec<String> {
        let mut lines = vec![format!("export class {} {{", self.class_name)];
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("{INDENT}get {}() {{", field.name));
            lines.push(format!("{INDENT}{INDENT}return {};", field.locator.code_snippet()));
            lines.push(format!("{INDENT}}}"));
        }
        lines.push("}".to_string());
        lines
    }

    fn katalon(&self, fields: &[PageField]) -> Vec<String> {
        let mut lines = vec![
            "import com.kms.katalon.core.testobject.ConditionType".to_string(),
            "import com.kms.katalon.core.testobject.TestObject".to_string(),
            String::new(),
            format!("class {} {{", self.class_name),
        ];
        for field in fields {
            lines.push(format!(
                "{INDENT}static TestObject {} = {}",
                field.name,
                field.locator.code_snippet()
            ));
        }
        lines.push("}".to_string());
        lines
    }
}

fn robot(fields: &[PageField]) -> Vec<String> {
    let mut lines = vec!["*** Variables ***".to_string()];
    for field in fields {
        lines.push(format!(
            "${{{}}}{INDENT}{}",
            field.name.to_ascii_uppercase(),
            field.locator.code_snippet()
        ));
    }
    lines
}

/// Page-object source for `locators` with the default class name
#[must_use]
pub fn emit(locators: &[Locator], tool: Tool, language: ProgrammingLanguage) -> String {
    PageObjectBuilder::new(tool, language)
        .with_locators(locators.iter().cloned())
        .emit()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn named(name: &str, method: LocatorMethod, value: &str, code: &str) -> Locator {
        Locator::new(method, value)
            .with_element_name(name)
            .with_code_snippet(code)
    }

    mod case_tests {
        use super::*;

        #[test]
        fn test_case_conventions() {
            let label = "Button \"Login now\"";
            assert_eq!(NameCase::Snake.apply(label), "button_login_now");
            assert_eq!(NameCase::Camel.apply(label), "buttonLoginNow");
            assert_eq!(NameCase::Pascal.apply(label), "ButtonLoginNow");
        }

        #[test]
        fn test_input_type_prefix() {
            assert_eq!(NameCase::Camel.apply("EMAIL Input (name=mail)"), "emailInputNameMail");
            assert_eq!(NameCase::Snake.apply("TEXT Input \"Email\""), "text_input_email");
        }

        #[test]
        fn test_humps_and_digits() {
            assert_eq!(NameCase::Snake.apply("loginButton"), "login_button");
            assert_eq!(NameCase::Snake.apply("HTMLInput"), "html_input");
            assert_eq!(NameCase::Camel.apply("\"2024 Report\""), "element2024Report");
        }

        #[test]
        fn test_empty_label_falls_back() {
            assert_eq!(NameCase::Camel.apply("\"!!\""), "element");
        }

        #[test]
        fn test_language_conventions() {
            assert_eq!(NameCase::for_language(ProgrammingLanguage::Robot), NameCase::Snake);
            assert_eq!(NameCase::for_language(ProgrammingLanguage::CSharp), NameCase::Pascal);
            assert_eq!(NameCase::for_language(ProgrammingLanguage::Groovy), NameCase::Camel);
        }
    }

    mod namer_tests {
        use super::*;

        #[test]
        fn test_counter_starts_at_two() {
            let mut namer = VariableNamer::new();
            assert_eq!(namer.unique("link"), "link");
            assert_eq!(namer.unique("link"), "link2");
            assert_eq!(namer.unique("link"), "link3");
            assert_eq!(namer.unique("link2"), "link22");
        }
    }

    mod emit_tests {
        use super::*;

        #[test]
        fn test_selenium_java_members() {
            let source = emit(
                &[
                    named("Button \"Login\"", LocatorMethod::Id, "#login", "driver.findElement(By.id(\"login\"));"),
                    named("Button \"Login\"", LocatorMethod::Css, "button.x", "driver.findElement(By.cssSelector(\"button.x\"));"),
                ],
                Tool::Selenium,
                ProgrammingLanguage::Java,
            );
            assert!(source.contains("    private final By buttonLogin = By.id(\"login\");"));
            assert!(source.contains("    private final By buttonLogin2 = By.cssSelector(\"button.x\");"));
            assert!(source.contains("public MyPage(WebDriver driver) {"));
        }

        #[test]
        fn test_unexpected_snippet_falls_back_to_xpath() {
            let source = emit(
                &[named("Link", LocatorMethod::LinkText, "//a", "custom")],
                Tool::Selenium,
                ProgrammingLanguage::CSharp,
            );
            assert!(source.contains("private readonly By Link = By.XPath(\"//a\");"));
        }

        #[test]
        fn test_ruby_hash_constants() {
            let source = emit(
                &[named("Heading", LocatorMethod::Css, "h1.t", "driver.find_element(css: 'h1.t')")],
                Tool::Appium,
                ProgrammingLanguage::Ruby,
            );
            assert!(source.contains("  HEADING = { css: 'h1.t' }.freeze"));
        }

        #[test]
        fn test_playwright_python_assignments() {
            let source = PageObjectBuilder::new(Tool::Playwright, ProgrammingLanguage::Python)
                .with_class_name("LoginPage")
                .with_locator(named(
                    "Button \"Login\"",
                    LocatorMethod::Role,
                    "Role: button, Name: \"Login\"",
                    "page.get_by_role(\"button\", name=\"Login\")",
                ))
                .emit();
            assert!(source.contains("class LoginPage:"));
            assert!(source.contains("        self.button_login = page.get_by_role(\"button\", name=\"Login\")"));
        }

        #[test]
        fn test_robot_variables() {
            let source = emit(
                &[named("TEXT Input \"Email\"", LocatorMethod::Id, "#email", "id=email")],
                Tool::RobotFramework,
                ProgrammingLanguage::Robot,
            );
            assert_eq!(source, "*** Variables ***\n${TEXT_INPUT_EMAIL}    id=email\n");
        }

        #[test]
        fn test_missing_element_name() {
            let builder = PageObjectBuilder::new(Tool::Cypress, ProgrammingLanguage::JavaScript)
                .with_locator(Locator::new(LocatorMethod::Css, "a").with_code_snippet("cy.get('a')"));
            assert_eq!(builder.fields()[0].name, "element");
            assert!(builder.emit().contains("    get element() {\n        return cy.get('a');\n    }"));
        }
    }

    proptest! {
        #[test]
        fn prop_field_names_are_unique(labels in prop::collection::vec("[A-Za-z \"]{0,12}", 0..10)) {
            let builder = PageObjectBuilder::new(Tool::Selenium, ProgrammingLanguage::Java).with_locators(
                labels.iter().map(|l| Locator::new(LocatorMethod::Css, "a").with_element_name(l.as_str())),
            );
            let fields = builder.fields();
            let names: HashSet<&str> = fields.iter().map(|f| f.name.as_str()).collect();
            prop_assert_eq!(names.len(), fields.len());
        }
    }
}
