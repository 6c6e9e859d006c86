//! Id strategy: `#id` plus a `tag#id` CSS form, or a low-rated id when the
//! value looks generated.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::css_ident;
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let Some(id) = ctx.node.id() else {
        return;
    };
    let messages = ctx.messages();
    let selector_id = css_ident(&id);
    let value = format!("#{selector_id}");

    if ctx.classifier.is_dynamic(&id) {
        out.push(
            ctx.locator("id-dynamic", LocatorMethod::Id, value, &id, None)
                .with_priority(Priority::DynamicId)
                .with_stability(Stability::Low)
                .with_description(messages.id_dynamic),
        );
        return;
    }

    out.push(
        ctx.locator("id-robust", LocatorMethod::Id, value, &id, None)
            .with_priority(Priority::RobustId)
            .with_stability(Stability::High)
            .with_description(messages.id_robust),
    );
    out.push(
        ctx.plain("css-id", LocatorMethod::Css, format!("{}#{selector_id}", ctx.tag))
            .with_priority(Priority::CssId)
            .with_stability(Stability::High)
            .with_description(messages.css_id),
    );
}
