//! Strategy generators.
//!
//! Each generator inspects one element and appends zero or more candidate
//! locators. Generators are independent; the per-node list is ranked once
//! all of them have run.

mod attribute;
mod css_class;
mod id;
mod label;
mod link_text;
mod name;
mod role;
mod xpath_text;

use crate::config::{EngineConfig, Heuristics};
use crate::dom::ElementNode;
use crate::dynamic::DynamicClassifier;
use crate::formatter::{self, RoleHint};
use crate::i18n::Messages;
use crate::locator::{derive_id, Locator, LocatorMethod};
use crate::ranking::sort_locators;
use crate::tool::{ProgrammingLanguage, Tool};

pub use role::{infer_role, VALID_ROLES};

/// Everything a generator needs to know about the node under analysis
pub struct StrategyContext<'a, N: ElementNode> {
    node: &'a N,
    container: &'a N,
    config: &'a EngineConfig,
    classifier: &'a DynamicClassifier,
    element_name: &'a str,
    ordinal: usize,
    tag: String,
    raw_text: String,
    trimmed_text: String,
    is_leaf: bool,
}

impl<'a, N: ElementNode> StrategyContext<'a, N> {
    /// Snapshot the node's tag, text and leaf flag
    #[must_use]
    pub fn new(
        node: &'a N,
        container: &'a N,
        config: &'a EngineConfig,
        classifier: &'a DynamicClassifier,
        element_name: &'a str,
        ordinal: usize,
    ) -> Self {
        let raw_text = node.text_content();
        let trimmed_text = raw_text.trim().to_string();
        Self {
            tag: node.tag_name(),
            is_leaf: node.is_leaf(),
            node,
            container,
            config,
            classifier,
            element_name,
            ordinal,
            raw_text,
            trimmed_text,
        }
    }

    fn tool(&self) -> Tool {
        self.config.tool()
    }

    fn language(&self) -> ProgrammingLanguage {
        self.config.language()
    }

    fn heuristics(&self) -> &Heuristics {
        self.config.heuristics()
    }

    fn messages(&self) -> &'static Messages {
        self.config.locale().messages()
    }

    fn text_len(&self) -> usize {
        self.trimmed_text.chars().count()
    }

    /// Start a locator: id, element name, tag and rendered code filled in
    ///
    /// `render_input` is what the formatter sees; it differs from `value`
    /// for id and name locators, whose values carry selector punctuation.
    fn locator(
        &self,
        strategy: &str,
        method: LocatorMethod,
        value: impl Into<String>,
        render_input: &str,
        role: Option<&RoleHint<'_>>,
    ) -> Locator {
        let value = value.into();
        let code = formatter::render(method, render_input, self.tool(), self.language(), role);
        Locator::new(method, value.clone())
            .with_id(derive_id(strategy, method, &value, &self.tag, self.ordinal))
            .with_element_name(self.element_name)
            .with_tag_name(self.tag.clone())
            .with_code_snippet(code)
    }

    /// Locator whose rendered code is built straight from its value
    fn plain(&self, strategy: &str, method: LocatorMethod, value: String) -> Locator {
        let code_input = value.clone();
        self.locator(strategy, method, value, &code_input, None)
    }
}

/// Run every generator over one node and rank the result
#[must_use]
pub fn generate_for_node<N: ElementNode>(ctx: &StrategyContext<'_, N>) -> Vec<Locator> {
    let mut out = Vec::new();
    if ctx.tool().is_role_aware() {
        role::generate(ctx, &mut out);
    }
    id::generate(ctx, &mut out);
    name::generate(ctx, &mut out);
    label::generate(ctx, &mut out);
    link_text::generate(ctx, &mut out);
    css_class::generate(ctx, &mut out);
    attribute::generate(ctx, &mut out);
    xpath_text::generate(ctx, &mut out);

    out.retain(|locator| ctx.tool().supports(locator.method()));
    sort_locators(&mut out, ctx.tool());
    out
}
