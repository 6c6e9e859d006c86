//! `<label for>` association.
//!
//! The label is searched in the whole container, not only among ancestors.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::xpath_literal;
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let Some(id) = ctx.node.id() else {
        return;
    };
    let Some(text) = label_text(ctx.container, &id) else {
        return;
    };
    let messages = ctx.messages();

    if ctx.tool().is_role_aware() {
        out.push(
            ctx.plain("label", LocatorMethod::Label, text)
                .with_priority(Priority::Label)
                .with_stability(Stability::High)
                .with_description(messages.xpath_label),
        );
    } else {
        let xpath = format!(
            "//label[normalize-space()={}]/following::{}[1]",
            xpath_literal(&text),
            ctx.tag
        );
        out.push(
            ctx.plain("xpath-label", LocatorMethod::XPath, xpath)
                .with_priority(Priority::XPathLabel)
                .with_stability(Stability::High)
                .with_description(messages.xpath_label),
        );
    }
}

/// Trimmed text of the first `<label for=id>` in the container
fn label_text<N: ElementNode>(container: &N, id: &str) -> Option<String> {
    container
        .descendants()
        .into_iter()
        .find(|el| el.tag_name() == "label" && el.attribute("for").as_deref() == Some(id))
        .map(|label| label.text_content().trim().to_string())
        .filter(|text| !text.is_empty())
}
