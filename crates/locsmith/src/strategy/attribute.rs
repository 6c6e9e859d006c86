//! Attribute equality selectors, emitted as CSS and XPath pairs.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::{css_string, xpath_literal};
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

/// Attribute names handled elsewhere or never worth selecting on
const SKIPPED: [&str; 3] = ["id", "class", "style"];

/// Attribute-name prefixes written by frameworks
const FRAMEWORK_ATTR_PREFIXES: [&str; 2] = ["data-v-", "ng-"];

/// Names usable unescaped in both `[name=...]` and `@name`; framework
/// bindings such as `:class` or `@click` are not
fn is_plain_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Test-id naming conventions (`data-testid`, `data-test`, `data-cy`, ...)
pub(crate) fn is_test_id_attribute(name: &str) -> bool {
    name.starts_with("data-test") || name.starts_with("data-cy")
}

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let heuristics = ctx.heuristics();
    let messages = ctx.messages();

    for (name, value) in ctx.node.attributes() {
        if SKIPPED.contains(&name.as_str())
            || !is_plain_attribute_name(&name)
            || FRAMEWORK_ATTR_PREFIXES.iter().any(|p| name.starts_with(p))
        {
            continue;
        }
        let short = !value.is_empty() && value.chars().count() < heuristics.attribute_value_max_len;
        if !heuristics.is_important_attribute(&name) && !short {
            continue;
        }

        let test_id = is_test_id_attribute(&name);
        let css = format!("{}[{name}={}]", ctx.tag, css_string(&value));
        let (priority, stability) = if test_id {
            (Priority::CssId, Stability::High)
        } else {
            (Priority::CssAttr, Stability::Medium)
        };
        out.push(
            ctx.plain("css-attr", LocatorMethod::Css, css)
                .with_priority(priority)
                .with_stability(stability)
                .with_description(messages.css_attr(&name)),
        );

        let xpath = format!("//{}[@{name}={}]", ctx.tag, xpath_literal(&value));
        out.push(
            ctx.plain("xpath-attr", LocatorMethod::XPath, xpath)
                .with_priority(Priority::XPathComplex)
                .with_stability(Stability::Medium)
                .with_description(messages.xpath_attr),
        );
    }
}
