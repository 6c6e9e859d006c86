//! The `(tool, method, language)` rule table.
//!
//! Each row names the tools and languages it covers and how it renders. The
//! first matching row wins; adding a tool or a language means adding rows,
//! not branches.

use super::{css_double_quoted, css_ident, css_string, escape_double, escape_single, link_text_xpath, RoleHint};
use crate::locator::LocatorMethod;
use crate::tool::{ProgrammingLanguage, Tool};

use LocatorMethod::{Css, Id, Label, LinkText, Name, Placeholder, Role, Text, XPath};
use ProgrammingLanguage::{CSharp, Groovy, Java, JavaScript, Python, Robot, Ruby, TypeScript};

/// How a value is escaped before it is spliced into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    /// `"` → `\"`
    Double,
    /// `'` → `\'`
    Single,
    /// Spliced verbatim (keyword syntaxes)
    Raw,
}

impl Quote {
    fn apply(self, value: &str) -> String {
        match self {
            Self::Double => escape_double(value),
            Self::Single => escape_single(value),
            Self::Raw => value.to_string(),
        }
    }
}

type Builder = fn(&str, ProgrammingLanguage, Option<&RoleHint<'_>>) -> Option<String>;

#[derive(Clone, Copy)]
pub(crate) enum Template {
    Wrap {
        prefix: &'static str,
        suffix: &'static str,
        quote: Quote,
    },
    Build(Builder),
}

#[derive(Clone, Copy)]
pub(crate) struct Rule {
    tools: &'static [Tool],
    method: LocatorMethod,
    /// Empty matches every language
    languages: &'static [ProgrammingLanguage],
    template: Template,
}

impl Rule {
    fn matches(&self, method: LocatorMethod, tool: Tool, language: ProgrammingLanguage) -> bool {
        self.method == method
            && self.tools.contains(&tool)
            && (self.languages.is_empty() || self.languages.contains(&language))
    }

    fn render(
        &self,
        value: &str,
        language: ProgrammingLanguage,
        role: Option<&RoleHint<'_>>,
    ) -> Option<String> {
        match self.template {
            Template::Wrap {
                prefix,
                suffix,
                quote,
            } => Some(format!("{prefix}{}{suffix}", quote.apply(value))),
            Template::Build(build) => build(value, language, role),
        }
    }
}

const fn wrap(
    tools: &'static [Tool],
    method: LocatorMethod,
    languages: &'static [ProgrammingLanguage],
    prefix: &'static str,
    suffix: &'static str,
    quote: Quote,
) -> Rule {
    Rule {
        tools,
        method,
        languages,
        template: Template::Wrap {
            prefix,
            suffix,
            quote,
        },
    }
}

const fn build(tools: &'static [Tool], method: LocatorMethod, builder: Builder) -> Rule {
    Rule {
        tools,
        method,
        languages: &[],
        template: Template::Build(builder),
    }
}

const WEBDRIVER: &[Tool] = &[Tool::Selenium, Tool::Appium];
const ROBOT: &[Tool] = &[Tool::RobotFramework];
const CYPRESS: &[Tool] = &[Tool::Cypress];
const KATALON: &[Tool] = &[Tool::Katalon];
const PLAYWRIGHT: &[Tool] = &[Tool::Playwright];
const JS: &[ProgrammingLanguage] = &[JavaScript, TypeScript];

pub(crate) static RULES: &[Rule] = &[
    // Robot Framework keyword locators
    wrap(ROBOT, Id, &[Robot], "id=", "", Quote::Raw),
    wrap(ROBOT, Name, &[Robot], "name=", "", Quote::Raw),
    wrap(ROBOT, LinkText, &[Robot], "link=", "", Quote::Raw),
    wrap(ROBOT, Css, &[Robot], "css=", "", Quote::Raw),
    wrap(ROBOT, XPath, &[Robot], "xpath=", "", Quote::Raw),
    // Cypress chains
    build(CYPRESS, Id, cypress_id),
    build(CYPRESS, Name, cypress_name),
    wrap(CYPRESS, LinkText, JS, "cy.contains('", "')", Quote::Single),
    wrap(CYPRESS, Css, JS, "cy.get('", "')", Quote::Single),
    wrap(CYPRESS, XPath, JS, "cy.xpath('", "')", Quote::Single),
    // Katalon test objects
    wrap(KATALON, Id, &[Groovy], "new TestObject().addProperty(\"id\", ConditionType.EQUALS, \"", "\")", Quote::Double),
    wrap(KATALON, Name, &[Groovy], "new TestObject().addProperty(\"name\", ConditionType.EQUALS, \"", "\")", Quote::Double),
    wrap(KATALON, Css, &[Groovy], "new TestObject().addProperty(\"css\", ConditionType.EQUALS, \"", "\")", Quote::Double),
    wrap(KATALON, XPath, &[Groovy], "new TestObject().addProperty(\"xpath\", ConditionType.EQUALS, \"", "\")", Quote::Double),
    build(KATALON, LinkText, katalon_link_text),
    // Selenium / Appium, Java
    wrap(WEBDRIVER, Id, &[Java], "driver.findElement(By.id(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, Name, &[Java], "driver.findElement(By.name(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, LinkText, &[Java], "driver.findElement(By.linkText(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, Css, &[Java], "driver.findElement(By.cssSelector(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, XPath, &[Java], "driver.findElement(By.xpath(\"", "\"));", Quote::Double),
    // Python
    wrap(WEBDRIVER, Id, &[Python], "driver.find_element(By.ID, \"", "\")", Quote::Double),
    wrap(WEBDRIVER, Name, &[Python], "driver.find_element(By.NAME, \"", "\")", Quote::Double),
    wrap(WEBDRIVER, LinkText, &[Python], "driver.find_element(By.LINK_TEXT, \"", "\")", Quote::Double),
    wrap(WEBDRIVER, Css, &[Python], "driver.find_element(By.CSS_SELECTOR, \"", "\")", Quote::Double),
    wrap(WEBDRIVER, XPath, &[Python], "driver.find_element(By.XPATH, \"", "\")", Quote::Double),
    // C#
    wrap(WEBDRIVER, Id, &[CSharp], "driver.FindElement(By.Id(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, Name, &[CSharp], "driver.FindElement(By.Name(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, LinkText, &[CSharp], "driver.FindElement(By.LinkText(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, Css, &[CSharp], "driver.FindElement(By.CssSelector(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, XPath, &[CSharp], "driver.FindElement(By.XPath(\"", "\"));", Quote::Double),
    // JavaScript / TypeScript
    wrap(WEBDRIVER, Id, JS, "await driver.findElement(By.id(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, Name, JS, "await driver.findElement(By.name(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, LinkText, JS, "await driver.findElement(By.linkText(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, Css, JS, "await driver.findElement(By.css(\"", "\"));", Quote::Double),
    wrap(WEBDRIVER, XPath, JS, "await driver.findElement(By.xpath(\"", "\"));", Quote::Double),
    // Ruby
    wrap(WEBDRIVER, Id, &[Ruby], "driver.find_element(id: '", "')", Quote::Single),
    wrap(WEBDRIVER, Name, &[Ruby], "driver.find_element(name: '", "')", Quote::Single),
    wrap(WEBDRIVER, LinkText, &[Ruby], "driver.find_element(link_text: '", "')", Quote::Single),
    wrap(WEBDRIVER, Css, &[Ruby], "driver.find_element(css: '", "')", Quote::Single),
    wrap(WEBDRIVER, XPath, &[Ruby], "driver.find_element(xpath: '", "')", Quote::Single),
    // Playwright builders switch on language internally
    build(PLAYWRIGHT, Role, playwright_role),
    build(PLAYWRIGHT, Label, playwright_label),
    build(PLAYWRIGHT, Placeholder, playwright_placeholder),
    build(PLAYWRIGHT, Text, playwright_text),
    build(PLAYWRIGHT, LinkText, playwright_text),
    build(PLAYWRIGHT, Id, playwright_id),
    build(PLAYWRIGHT, Name, playwright_name),
    build(PLAYWRIGHT, Css, playwright_css),
    build(PLAYWRIGHT, XPath, playwright_xpath),
];

/// First rule covering the combination
pub(crate) fn lookup(
    method: LocatorMethod,
    tool: Tool,
    language: ProgrammingLanguage,
) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(method, tool, language))
}

pub(crate) fn apply(
    rule: &Rule,
    value: &str,
    language: ProgrammingLanguage,
    role: Option<&RoleHint<'_>>,
) -> Option<String> {
    rule.render(value, language, role)
}

fn cypress_id(value: &str, _: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    Some(format!("cy.get('#{}')", escape_single(&css_ident(value))))
}

fn cypress_name(value: &str, _: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    let selector = format!("[name={}]", css_double_quoted(value));
    Some(format!("cy.get('{}')", escape_single(&selector)))
}

/// Without element context the normalized form is used; the link-text
/// generator renders the exact form itself for leaf anchors.
fn katalon_link_text(value: &str, _: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    let xpath = link_text_xpath(value, false);
    Some(format!(
        "new TestObject().addProperty(\"xpath\", ConditionType.EQUALS, \"{}\")",
        escape_double(&xpath)
    ))
}

/// String literal in the language's Playwright idiom
fn pw_literal(language: ProgrammingLanguage, value: &str) -> String {
    if language.is_js_family() {
        format!("'{}'", escape_single(value))
    } else {
        format!("\"{}\"", escape_double(value))
    }
}

/// Receiver plus query name for a Playwright `getBy*` call
fn pw_call(language: ProgrammingLanguage, query: &str) -> String {
    match language {
        ProgrammingLanguage::Python => format!("page.get_by_{}", query.to_ascii_lowercase()),
        ProgrammingLanguage::CSharp => format!("Page.GetBy{query}"),
        _ => format!("page.getBy{query}"),
    }
}

fn pw_locator(language: ProgrammingLanguage, selector: &str) -> String {
    let receiver = if language == ProgrammingLanguage::CSharp {
        "Page.Locator"
    } else {
        "page.locator"
    };
    format!("{receiver}({})", pw_literal(language, selector))
}

fn playwright_role(_: &str, language: ProgrammingLanguage, role: Option<&RoleHint<'_>>) -> Option<String> {
    let hint = role?;
    let call = pw_call(language, "Role");
    let name = hint.name.filter(|n| !n.is_empty());
    let code = match language {
        ProgrammingLanguage::Java => {
            let role = format!("AriaRole.{}", hint.role.to_ascii_uppercase());
            match name {
                Some(name) => format!(
                    "{call}({role}, new Page.GetByRoleOptions().setName({}))",
                    pw_literal(language, name)
                ),
                None => format!("{call}({role})"),
            }
        }
        ProgrammingLanguage::CSharp => {
            let role = format!("AriaRole.{}", capitalize(hint.role));
            match name {
                Some(name) => format!(
                    "{call}({role}, new() {{ Name = {} }})",
                    pw_literal(language, name)
                ),
                None => format!("{call}({role})"),
            }
        }
        ProgrammingLanguage::Python => {
            let role = pw_literal(language, hint.role);
            match name {
                Some(name) => format!("{call}({role}, name={})", pw_literal(language, name)),
                None => format!("{call}({role})"),
            }
        }
        _ => {
            let role = pw_literal(language, hint.role);
            match name {
                Some(name) => format!("{call}({role}, {{ name: {} }})", pw_literal(language, name)),
                None => format!("{call}({role})"),
            }
        }
    };
    Some(code)
}

fn playwright_label(value: &str, language: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    Some(format!("{}({})", pw_call(language, "Label"), pw_literal(language, value)))
}

fn playwright_placeholder(
    value: &str,
    language: ProgrammingLanguage,
    _: Option<&RoleHint<'_>>,
) -> Option<String> {
    Some(format!(
        "{}({})",
        pw_call(language, "Placeholder"),
        pw_literal(language, value)
    ))
}

fn playwright_text(value: &str, language: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    let call = pw_call(language, "Text");
    let text = pw_literal(language, value);
    Some(match language {
        ProgrammingLanguage::Python => format!("{call}({text}, exact=True)"),
        ProgrammingLanguage::Java => {
            format!("{call}({text}, new Page.GetByTextOptions().setExact(true))")
        }
        ProgrammingLanguage::CSharp => format!("{call}({text}, new() {{ Exact = true }})"),
        _ => format!("{call}({text}, {{ exact: true }})"),
    })
}

fn playwright_id(value: &str, language: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    Some(pw_locator(language, &format!("#{}", css_ident(value))))
}

fn playwright_name(value: &str, language: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    let selector = if language.is_js_family() {
        format!("[name={}]", css_double_quoted(value))
    } else {
        format!("[name={}]", css_string(value))
    };
    Some(pw_locator(language, &selector))
}

fn playwright_css(value: &str, language: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    Some(pw_locator(language, value))
}

fn playwright_xpath(value: &str, language: ProgrammingLanguage, _: Option<&RoleHint<'_>>) -> Option<String> {
    Some(pw_locator(language, &format!("xpath={value}")))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
