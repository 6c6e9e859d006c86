//! Text-based XPath variants: exact, text plus class, normalized and
//! partial matches.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::xpath_literal;
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

/// Tags whose text is not user-visible content
const TEXTLESS_TAGS: [&str; 4] = ["script", "style", "select", "svg"];

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let text = &ctx.trimmed_text;
    if text.is_empty() || TEXTLESS_TAGS.contains(&ctx.tag.as_str()) {
        return;
    }
    let heuristics = ctx.heuristics();
    let messages = ctx.messages();
    let tag = &ctx.tag;
    let quoted = xpath_literal(text);

    let has_newline = ctx.raw_text.contains(['\n', '\r']);
    if ctx.is_leaf && !has_newline && ctx.raw_text == *text {
        out.push(
            ctx.plain("xpath-text-exact", LocatorMethod::XPath, format!("//{tag}[text()={quoted}]"))
                .with_priority(Priority::XPathText)
                .with_stability(Stability::High)
                .with_description(messages.xpath_text_exact),
        );

        let first_class = ctx
            .node
            .classes()
            .into_iter()
            .find(|class| !ctx.classifier.is_dynamic_class(class));
        if let Some(class) = first_class {
            let xpath = format!(
                "//{tag}[text()={quoted} and contains(@class, {})]",
                xpath_literal(&class)
            );
            out.push(
                ctx.plain("xpath-text-class", LocatorMethod::XPath, xpath)
                    .with_priority(Priority::XPathComplex)
                    .with_stability(Stability::High)
                    .with_description(messages.xpath_text_class),
            );
        }
    }

    let len = ctx.text_len();
    if len < heuristics.normalized_text_max_len {
        out.push(
            ctx.plain(
                "xpath-text-norm",
                LocatorMethod::XPath,
                format!("//{tag}[normalize-space()={quoted}]"),
            )
            .with_priority(Priority::XPathText)
            .with_stability(Stability::High)
            .with_description(messages.xpath_text),
        );
    }

    if len > heuristics.contains_text_min_len && len < heuristics.contains_text_max_len {
        let part: String = text.chars().take(heuristics.contains_prefix_len).collect();
        let part = xpath_literal(&part);
        let (strategy, xpath, description) = if ctx.is_leaf {
            (
                "xpath-contains-text",
                format!("//{tag}[contains(text(), {part})]"),
                messages.xpath_contains,
            )
        } else {
            (
                "xpath-contains-dot",
                format!("//{tag}[contains(., {part})]"),
                messages.xpath_contains_nested,
            )
        };
        out.push(
            ctx.plain(strategy, LocatorMethod::XPath, xpath)
                .with_priority(Priority::XPathComplex)
                .with_stability(Stability::Medium)
                .with_description(description),
        );
    }
}
