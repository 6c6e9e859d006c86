//! Code formatter matrix.
//!
//! Turns an abstract `(method, value)` pair into paste-ready source for a
//! `(tool, language)` target. Rendering never fails: a combination with no
//! rule falls back to the raw value.
//!
//! ```
//! use locsmith::formatter::render;
//! use locsmith::{LocatorMethod, ProgrammingLanguage, Tool};
//!
//! let code = render(LocatorMethod::Id, "submit-btn", Tool::Selenium, ProgrammingLanguage::Java, None);
//! assert_eq!(code, r#"driver.findElement(By.id("submit-btn"));"#);
//! ```

mod table;

use crate::locator::LocatorMethod;
use crate::tool::{ProgrammingLanguage, Tool};

/// Role and accessible name for role-based rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleHint<'a> {
    /// ARIA-like role (`button`, `textbox`, ...)
    pub role: &'a str,
    /// Accessible name, if one was found
    pub name: Option<&'a str>,
}

impl<'a> RoleHint<'a> {
    /// Hint with a role and optional name
    #[must_use]
    pub const fn new(role: &'a str, name: Option<&'a str>) -> Self {
        Self { role, name }
    }
}

/// Render source text for one locator
///
/// `role` is only consulted for [`LocatorMethod::Role`].
#[must_use]
pub fn render(
    method: LocatorMethod,
    value: &str,
    tool: Tool,
    language: ProgrammingLanguage,
    role: Option<&RoleHint<'_>>,
) -> String {
    table::lookup(method, tool, language)
        .and_then(|rule| table::apply(rule, value, language, role))
        .unwrap_or_else(|| value.to_string())
}

/// Whether the matrix has a rule for the combination
#[must_use]
pub fn has_rule(method: LocatorMethod, tool: Tool, language: ProgrammingLanguage) -> bool {
    table::lookup(method, tool, language).is_some()
}

/// Zero-based positional qualifier appended to role-aware tool code
#[must_use]
pub fn nth_suffix(language: ProgrammingLanguage, index: usize) -> String {
    match language {
        ProgrammingLanguage::CSharp => format!(".Nth({index})"),
        _ => format!(".nth({index})"),
    }
}

/// Escape for a double-quoted string literal
#[must_use]
pub fn escape_double(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape for a single-quoted string literal
#[must_use]
pub fn escape_single(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// XPath string literal
///
/// XPath 1.0 has no escape sequences, so text holding both quote kinds is
/// split on `'` and reassembled with `concat()`.
#[must_use]
pub fn xpath_literal(text: &str) -> String {
    match (text.contains('\''), text.contains('"')) {
        (false, _) => format!("'{text}'"),
        (true, false) => format!("\"{text}\""),
        (true, true) => {
            let parts: Vec<String> = text
                .split('\'')
                .map(|part| if part.is_empty() { String::new() } else { format!("'{part}'") })
                .collect();
            let mut args = Vec::with_capacity(parts.len() * 2);
            for (i, part) in parts.into_iter().enumerate() {
                if i > 0 {
                    args.push("\"'\"".to_string());
                }
                if !part.is_empty() {
                    args.push(part);
                }
            }
            format!("concat({})", args.join(", "))
        }
    }
}

/// Anchor XPath for tools without a link-text lookup
///
/// `exact` selects the own-text form, valid only for a leaf anchor whose
/// text has no surrounding whitespace; otherwise the string value is
/// normalized.
#[must_use]
pub fn link_text_xpath(text: &str, exact: bool) -> String {
    let literal = xpath_literal(text);
    if exact {
        format!("//a[text()={literal}]")
    } else {
        format!("//a[normalize-space()={literal}]")
    }
}

fn css_string_body(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\n', "\\a ")
}

/// CSS string literal, always double-quoted
#[must_use]
pub fn css_double_quoted(value: &str) -> String {
    format!("\"{}\"", css_string_body(value).replace('"', "\\\""))
}

/// CSS string literal: single quotes unless the value holds `'`
#[must_use]
pub fn css_string(value: &str) -> String {
    if value.contains('\'') {
        css_double_quoted(value)
    } else {
        format!("'{}'", css_string_body(value))
    }
}

/// Escape a class name or id for use as a CSS identifier
///
/// Utility classes such as `hover:bg-blue-500` or `w-1/2` carry characters
/// that end a compound selector unless escaped.
#[must_use]
pub fn css_ident(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let dash_lead = value.starts_with('-');
    for (i, c) in value.chars().enumerate() {
        let leading_digit = c.is_ascii_digit() && (i == 0 || (i == 1 && dash_lead));
        if leading_digit || c.is_control() {
            out.push_str(&format!("\\{:x} ", u32::from(c)));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use LocatorMethod::{Css, Id, Label, LinkText, Name, Placeholder, Role, Text, XPath};
    use ProgrammingLanguage::{CSharp, Groovy, Java, JavaScript, Python, Robot, Ruby, TypeScript};

    mod webdriver_tests {
        use super::*;

        #[test]
        fn test_selenium_id_templates() {
            assert_eq!(
                render(Id, "submit-btn", Tool::Selenium, Java, None),
                "driver.findElement(By.id(\"submit-btn\"));"
            );
            assert_eq!(
                render(Id, "submit-btn", Tool::Selenium, Python, None),
                "driver.find_element(By.ID, \"submit-btn\")"
            );
            assert_eq!(
                render(Id, "submit-btn", Tool::Selenium, CSharp, None),
                "driver.FindElement(By.Id(\"submit-btn\"));"
            );
            assert_eq!(
                render(Id, "submit-btn", Tool::Appium, JavaScript, None),
                "await driver.findElement(By.id(\"submit-btn\"));"
            );
            assert_eq!(
                render(Id, "submit-btn", Tool::Selenium, Ruby, None),
                "driver.find_element(id: 'submit-btn')"
            );
        }

        #[test]
        fn test_css_and_xpath_per_language() {
            assert_eq!(
                render(Css, "button.btn", Tool::Selenium, Java, None),
                "driver.findElement(By.cssSelector(\"button.btn\"));"
            );
            assert_eq!(
                render(XPath, "//a", Tool::Selenium, CSharp, None),
                "driver.FindElement(By.XPath(\"//a\"));"
            );
            assert_eq!(
                render(LinkText, "Go", Tool::Appium, Python, None),
                "driver.find_element(By.LINK_TEXT, \"Go\")"
            );
        }

        #[test]
        fn test_double_quote_escaping() {
            assert_eq!(
                render(XPath, "//a[text()=\"it's\"]", Tool::Selenium, Java, None),
                "driver.findElement(By.xpath(\"//a[text()=\\\"it's\\\"]\"));"
            );
        }

        #[test]
        fn test_single_quote_escaping_for_ruby() {
            assert_eq!(
                render(Css, "input[name='q']", Tool::Selenium, Ruby, None),
                "driver.find_element(css: 'input[name=\\'q\\']')"
            );
        }

        #[test]
        fn test_role_falls_back_to_raw_value() {
            assert_eq!(
                render(Role, "Role: button", Tool::Selenium, Java, None),
                "Role: button"
            );
        }
    }

    mod keyword_tests {
        use super::*;

        #[test]
        fn test_robot_keywords() {
            let cases = [
                (Id, "id=x"),
                (Name, "name=x"),
                (LinkText, "link=x"),
                (Css, "css=x"),
                (XPath, "xpath=x"),
            ];
            for (method, expected) in cases {
                assert_eq!(render(method, "x", Tool::RobotFramework, Robot, None), expected);
            }
        }

        #[test]
        fn test_cypress_chains() {
            assert_eq!(render(Id, "u", Tool::Cypress, JavaScript, None), "cy.get('#u')");
            assert_eq!(
                render(Name, "u", Tool::Cypress, TypeScript, None),
                "cy.get('[name=\"u\"]')"
            );
            assert_eq!(render(Label, "User", Tool::Cypress, JavaScript, None), "User");
            assert_eq!(
                render(Name, "a\"b", Tool::Cypress, JavaScript, None),
                "cy.get('[name=\"a\\\\\"b\"]')"
            );
            assert_eq!(
                render(Id, "w-1/2", Tool::Cypress, JavaScript, None),
                "cy.get('#w-1\\\\/2')"
            );
            assert_eq!(
                render(Css, "a[title='x']", Tool::Cypress, JavaScript, None),
                "cy.get('a[title=\\'x\\']')"
            );
        }

        #[test]
        fn test_katalon_test_objects() {
            assert_eq!(
                render(Css, "button.btn", Tool::Katalon, Groovy, None),
                "new TestObject().addProperty(\"css\", ConditionType.EQUALS, \"button.btn\")"
            );
            assert_eq!(
                render(LinkText, "Continue", Tool::Katalon, Groovy, None),
                "new TestObject().addProperty(\"xpath\", ConditionType.EQUALS, \"//a[normalize-space()='Continue']\")"
            );
        }
    }

    mod playwright_tests {
        use super::*;

        #[test]
        fn test_role_per_language() {
            let hint = RoleHint::new("button", Some("Login"));
            let cases = [
                (JavaScript, "page.getByRole('button', { name: 'Login' })"),
                (Python, "page.get_by_role(\"button\", name=\"Login\")"),
                (
                    Java,
                    "page.getByRole(AriaRole.BUTTON, new Page.GetByRoleOptions().setName(\"Login\"))",
                ),
                (CSharp, "Page.GetByRole(AriaRole.Button, new() { Name = \"Login\" })"),
            ];
            for (language, expected) in cases {
                assert_eq!(render(Role, "", Tool::Playwright, language, Some(&hint)), expected);
            }
        }

        #[test]
        fn test_role_without_name() {
            let hint = RoleHint::new("textbox", None);
            assert_eq!(
                render(Role, "Role: textbox", Tool::Playwright, TypeScript, Some(&hint)),
                "page.getByRole('textbox')"
            );
        }

        #[test]
        fn test_semantic_queries() {
            assert_eq!(
                render(Label, "Email", Tool::Playwright, Python, None),
                "page.get_by_label(\"Email\")"
            );
            assert_eq!(
                render(Placeholder, "Search", Tool::Playwright, CSharp, None),
                "Page.GetByPlaceholder(\"Search\")"
            );
            assert_eq!(
                render(Text, "Continue", Tool::Playwright, JavaScript, None),
                "page.getByText('Continue', { exact: true })"
            );
            assert_eq!(
                render(LinkText, "Continue", Tool::Playwright, Java, None),
                "page.getByText(\"Continue\", new Page.GetByTextOptions().setExact(true))"
            );
        }

        #[test]
        fn test_locator_forms() {
            assert_eq!(
                render(Id, "user", Tool::Playwright, JavaScript, None),
                "page.locator('#user')"
            );
            assert_eq!(
                render(Name, "q", Tool::Playwright, JavaScript, None),
                "page.locator('[name=\"q\"]')"
            );
            assert_eq!(
                render(Name, "q", Tool::Playwright, Python, None),
                "page.locator(\"[name='q']\")"
            );
            assert_eq!(
                render(XPath, "//a", Tool::Playwright, CSharp, None),
                "Page.Locator(\"xpath=//a\")"
            );
        }

        #[test]
        fn test_nth_suffix() {
            assert_eq!(nth_suffix(JavaScript, 1), ".nth(1)");
            assert_eq!(nth_suffix(CSharp, 0), ".Nth(0)");
        }
    }

    mod literal_tests {
        use super::*;

        #[test]
        fn test_xpath_literal_quoting() {
            assert_eq!(xpath_literal("Login"), "'Login'");
            assert_eq!(xpath_literal("it's"), "\"it's\"");
            assert_eq!(xpath_literal("say \"hi\""), "'say \"hi\"'");
        }

        #[test]
        fn test_xpath_literal_with_both_quotes_uses_concat() {
            assert_eq!(
                xpath_literal("He said \"it's\""),
                "concat('He said \"it', \"'\", 's\"')"
            );
            assert_eq!(xpath_literal("'\"'"), "concat(\"'\", '\"', \"'\")");
        }

        #[test]
        fn test_link_text_xpath_forms() {
            assert_eq!(link_text_xpath("Continue", true), "//a[text()='Continue']");
            assert_eq!(
                link_text_xpath("Continue", false),
                "//a[normalize-space()='Continue']"
            );
        }

        #[test]
        fn test_css_strings() {
            assert_eq!(css_string("q"), "'q'");
            assert_eq!(css_string("Bob's"), "\"Bob's\"");
            assert_eq!(css_string("He said \"it's\""), "\"He said \\\"it's\\\"\"");
            assert_eq!(css_double_quoted("a\\b"), "\"a\\\\b\"");
        }

        #[test]
        fn test_css_ident_escapes_utility_classes() {
            assert_eq!(css_ident("btn-primary"), "btn-primary");
            assert_eq!(css_ident("hover:bg-blue-500"), "hover\\:bg-blue-500");
            assert_eq!(css_ident("w-1/2"), "w-1\\/2");
            assert_eq!(css_ident("v1.2"), "v1\\.2");
            assert_eq!(css_ident("2col"), "\\32 col");
            assert_eq!(css_ident("-1x"), "-\\31 x");
            assert_eq!(css_ident("café"), "café");
        }
    }

    proptest! {
        #[test]
        fn prop_double_escape_leaves_no_bare_quote(value in ".{0,40}") {
            let escaped = escape_double(&value);
            let mut backslashes = 0usize;
            for c in escaped.chars() {
                if c == '"' {
                    prop_assert!(backslashes % 2 == 1);
                }
                backslashes = if c == '\\' { backslashes + 1 } else { 0 };
            }
        }

        #[test]
        fn prop_xpath_literal_is_closed(text in "[a-z'\" ]{0,20}") {
            let literal = xpath_literal(&text);
            if !literal.starts_with("concat(") {
                let delimiter = literal.chars().next().unwrap();
                prop_assert!(literal.ends_with(delimiter));
                prop_assert!(!literal[1..literal.len() - 1].contains(delimiter));
            }
        }

        #[test]
        fn prop_unknown_combinations_return_raw(value in "[a-z#.\\[\\]=']{0,20}") {
            prop_assert_eq!(render(Role, &value, Tool::Cypress, JavaScript, None), value);
        }
    }
}
