//! Anchor text strategy.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::{link_text_xpath, render};
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    if ctx.tag != "a" || ctx.trimmed_text.is_empty() {
        return;
    }
    if ctx.text_len() >= ctx.heuristics().link_text_max_len {
        return;
    }
    let mut locator = ctx
        .plain("link-text", LocatorMethod::LinkText, ctx.trimmed_text.clone())
        .with_priority(Priority::LinkText)
        .with_stability(Stability::Medium)
        .with_description(ctx.messages().link_text);

    if !ctx.tool().has_link_text_lookup() {
        // text() only sees the anchor's own text node
        let exact = ctx.is_leaf && ctx.raw_text == ctx.trimmed_text;
        let xpath = link_text_xpath(&ctx.trimmed_text, exact);
        let code = render(LocatorMethod::XPath, &xpath, ctx.tool(), ctx.language(), None);
        locator = locator.with_code_snippet(code);
    }
    out.push(locator);
}
