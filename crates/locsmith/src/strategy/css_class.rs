//! Class selectors: one per stable class, plus the combined form.

use super::StrategyContext;
use crate::dom::ElementNode;
use crate::formatter::css_ident;
use crate::locator::{Locator, LocatorMethod, Priority, Stability};

pub(super) fn generate<N: ElementNode>(ctx: &StrategyContext<'_, N>, out: &mut Vec<Locator>) {
    let classes: Vec<String> = ctx
        .node
        .classes()
        .into_iter()
        .filter(|class| !ctx.classifier.is_dynamic_class(class))
        .map(|class| css_ident(&class))
        .collect();
    let messages = ctx.messages();

    for class in &classes {
        out.push(
            ctx.plain("css-class", LocatorMethod::Css, format!("{}.{class}", ctx.tag))
                .with_priority(Priority::CssClass)
                .with_stability(Stability::Medium)
                .with_description(messages.css_class),
        );
    }

    if classes.len() > 1 {
        out.push(
            ctx.plain(
                "css-multi",
                LocatorMethod::Css,
                format!("{}.{}", ctx.tag, classes.join(".")),
            )
            .with_priority(Priority::CssClass)
            .with_stability(Stability::High)
            .with_description(messages.css_class_multi),
        );
    }
}
