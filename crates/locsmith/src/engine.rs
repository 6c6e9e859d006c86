//! Analysis pipeline.
//!
//! One call walks the container, names and analyzes every selected element,
//! resolves duplicate values across all of them and shapes the result as a
//! ranked list (root-only) or as groups (deep scan). Calls share no state.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::config::EngineConfig;
use crate::dedup::resolve_duplicates;
use crate::dom::ElementNode;
use crate::dynamic::DynamicClassifier;
use crate::locator::{GroupKey, Locator, LocatorGroup};
use crate::naming::name_of;
use crate::page_object::PageObjectBuilder;
use crate::strategy::{generate_for_node, StrategyContext};
use crate::walker::{filter_groups, group_locators, select_nodes};

/// Result of one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "results", rename_all = "snake_case")]
pub enum Analysis {
    /// Ranked locators of the root element
    Root(Vec<Locator>),
    /// Locators grouped by element name, root group first
    Groups(Vec<LocatorGroup>),
}

impl Analysis {
    /// Total number of locators
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Root(locators) => locators.len(),
            Self::Groups(groups) => groups.iter().map(|g| g.locators().len()).sum(),
        }
    }

    /// No locators at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every locator in output order
    pub fn locators(&self) -> Box<dyn Iterator<Item = &Locator> + '_> {
        match self {
            Self::Root(locators) => Box::new(locators.iter()),
            Self::Groups(groups) => Box::new(groups.iter().flat_map(LocatorGroup::locators)),
        }
    }

    /// One representative locator per element, as used for page objects
    #[must_use]
    pub fn representatives(&self) -> Vec<Locator> {
        match self {
            Self::Root(locators) => locators.first().cloned().into_iter().collect(),
            Self::Groups(groups) => groups.iter().filter_map(LocatorGroup::best).cloned().collect(),
        }
    }

    /// View as groups; a root list becomes a single root group
    #[must_use]
    pub fn into_groups(self) -> Vec<LocatorGroup> {
        match self {
            Self::Root(locators) if locators.is_empty() => Vec::new(),
            Self::Root(locators) => {
                let name = locators
                    .first()
                    .and_then(Locator::element_name)
                    .unwrap_or_default()
                    .to_string();
                vec![LocatorGroup::new(GroupKey::Root, name, locators)]
            }
            Self::Groups(groups) => groups,
        }
    }

    /// Keep what matches `query`; see [`filter_groups`]
    #[must_use]
    pub fn filter(self, query: &str) -> Self {
        match self {
            Self::Root(locators) => {
                let groups = Self::Root(locators).into_groups();
                Self::Root(
                    filter_groups(&groups, query)
                        .into_iter()
                        .flat_map(LocatorGroup::into_locators)
                        .collect(),
                )
            }
            Self::Groups(groups) => Self::Groups(filter_groups(&groups, query)),
        }
    }
}

/// Locator strategy engine bound to one configuration
#[derive(Debug, Clone)]
pub struct LocatorEngine {
    config: EngineConfig,
    classifier: DynamicClassifier,
}

impl LocatorEngine {
    /// Build an engine; the classifier is compiled once here
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let classifier = DynamicClassifier::new(config.heuristics());
        Self { config, classifier }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze the elements of a parse container
    ///
    /// An empty container yields an empty result, never an error.
    #[must_use]
    pub fn analyze<N: ElementNode>(&self, container: &N) -> Analysis {
        let config = &self.config;
        let span = debug_span!(
            "analyze",
            tool = %config.tool(),
            language = %config.language(),
            deep_scan = config.deep_scan()
        );
        let _guard = span.enter();

        let heuristics = config.heuristics();
        let nodes = select_nodes(container, config.deep_scan());
        let mut entries: Vec<(String, Vec<Locator>)> = Vec::with_capacity(nodes.len());
        for (ordinal, node) in nodes.iter().enumerate() {
            let name = name_of(node, &self.classifier, heuristics);
            let ctx = StrategyContext::new(node, container, config, &self.classifier, &name, ordinal);
            let locators = generate_for_node(&ctx);
            debug!(tag = %node.tag_name(), element = %name, count = locators.len(), "analyzed element");
            entries.push((name, locators));
        }

        // Resolve across every element, then hand each element its slice back
        let counts: Vec<usize> = entries.iter().map(|(_, l)| l.len()).collect();
        let flat: Vec<Locator> = entries.iter_mut().flat_map(|(_, l)| std::mem::take(l)).collect();
        let mut resolved = resolve_duplicates(flat, config).into_iter();
        for ((_, slot), count) in entries.iter_mut().zip(counts) {
            slot.extend(resolved.by_ref().take(count));
        }

        if config.deep_scan() {
            let tagged = entries
                .into_iter()
                .enumerate()
                .map(|(i, (name, locators))| (i == 0, name, locators))
                .collect();
            Analysis::Groups(group_locators(tagged))
        } else {
            Analysis::Root(entries.into_iter().next().map(|(_, l)| l).unwrap_or_default())
        }
    }

    /// Page-object source for an analysis, one member per element
    #[must_use]
    pub fn page_object(&self, analysis: &Analysis, class_name: &str) -> String {
        PageObjectBuilder::new(self.config.tool(), self.config.language())
            .with_class_name(class_name)
            .with_locators(analysis.representatives())
            .emit()
    }
}

/// One-shot analysis with a fresh engine
#[must_use]
pub fn analyze<N: ElementNode>(container: &N, config: &EngineConfig) -> Analysis {
    LocatorEngine::new(config.clone()).analyze(container)
}
