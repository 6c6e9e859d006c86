//! `name` attribute strategy.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::css_string;
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let Some(name) = ctx.node.attribute("name").filter(|n| !n.is_empty()) else {
        return;
    };
    if ctx.classifier.is_dynamic(&name) {
        return;
    }
    out.push(
        ctx.locator("name", LocatorMethod::Name, format!("[name={}]", css_string(&name)), &name, None)
            .with_priority(Priority::Name)
            .with_stability(Stability::High)
            .with_description(ctx.messages().name),
    );
}
