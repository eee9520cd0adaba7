use crate::config::RenderConfig;
use crate::error::StyleError;
use crate::styling::selector::{Attribute, PseudoClass, Selector, StyleClass, Tag, union};
use crate::styling::store::PropertyStore;

/// Anything that can name a rule: raw selector text or a built selector.
pub trait IntoSelectorText {
    fn into_selector_text(self) -> String;
}

impl IntoSelectorText for &str {
    fn into_selector_text(self) -> String {
        self.to_string()
    }
}

impl IntoSelectorText for String {
    fn into_selector_text(self) -> String {
        self
    }
}

impl IntoSelectorText for &String {
    fn into_selector_text(self) -> String {
        self.clone()
    }
}

impl IntoSelectorText for Selector {
    fn into_selector_text(self) -> String {
        self.external_form()
    }
}

impl IntoSelectorText for &Selector {
    fn into_selector_text(self) -> String {
        self.external_form()
    }
}

impl IntoSelectorText for StyleClass {
    fn into_selector_text(self) -> String {
        self.external_form()
    }
}

impl IntoSelectorText for Tag {
    fn into_selector_text(self) -> String {
        self.to_string()
    }
}

impl IntoSelectorText for Attribute {
    fn into_selector_text(self) -> String {
        self.to_string()
    }
}

impl IntoSelectorText for PseudoClass {
    fn into_selector_text(self) -> String {
        Selector::Pseudo(self).external_form()
    }
}

/// Effective selector of a rule nested under an already resolved parent.
///
/// Pseudo-class fragments chain onto the parent element; everything else
/// becomes a descendant.
pub fn resolve_selector(parent: &str, own: &str) -> String {
    if parent.is_empty() {
        own.to_string()
    } else if own.starts_with(':') {
        format!("{parent}{own}")
    } else {
        format!("{parent} {own}")
    }
}

/// Shared construction surface of the stylesheet root and every rule.
pub trait RuleContainer {
    fn rules(&self) -> &[CssRule];

    fn rules_mut(&mut self) -> &mut Vec<CssRule>;

    /// Creates a child rule, runs `body` against it, then links it in.
    fn open<F>(&mut self, selector: impl IntoSelectorText, body: F) -> &mut Self
    where
        Self: Sized,
        F: FnOnce(&mut CssRule),
    {
        let mut rule = CssRule::new(&selector.into_selector_text());
        body(&mut rule);
        self.rules_mut().push(rule);
        self
    }

    /// Like [`RuleContainer::open`], but the child is only linked when
    /// `body` succeeds.
    fn try_open<F, E>(&mut self, selector: impl IntoSelectorText, body: F) -> Result<&mut Self, E>
    where
        Self: Sized,
        F: FnOnce(&mut CssRule) -> Result<(), E>,
    {
        let mut rule = CssRule::new(&selector.into_selector_text());
        body(&mut rule)?;
        self.rules_mut().push(rule);
        Ok(self)
    }

    fn id<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        Self: Sized,
        F: FnOnce(&mut CssRule),
    {
        self.open(Tag::new(Tag::ANY).id(name), body)
    }

    fn class<F>(&mut self, class: StyleClass, body: F) -> &mut Self
    where
        Self: Sized,
        F: FnOnce(&mut CssRule),
    {
        self.open(Tag::new(Tag::ANY).with([class]), body)
    }

    fn for_any<S, F>(&mut self, selectors: impl IntoIterator<Item = S>, body: F) -> &mut Self
    where
        Self: Sized,
        S: Into<Selector>,
        F: FnOnce(&mut CssRule),
    {
        self.open(union(selectors), body)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    properties: PropertyStore,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: PropertyStore::new(),
            children: Vec::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.set(name, value);
        self
    }

    pub fn child(mut self, rule: CssRule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.properties.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Result<&str, StyleError> {
        self.properties.get(name)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.properties.get_or(name, default)
    }

    /// Renders this rule as a top-level block followed by its descendants.
    pub fn render(&self) -> String {
        self.render_under("")
    }

    /// Renders this rule nested under an already resolved parent selector.
    pub fn render_under(&self, parent: &str) -> String {
        let mut css = String::new();
        self.render_internal(&mut css, parent, &RenderConfig::default());
        css
    }

    pub(crate) fn render_internal(&self, css: &mut String, parent: &str, config: &RenderConfig) {
        let selector = resolve_selector(parent, &self.selector);
        tracing::trace!(%selector, properties = self.properties.len(), "rendering rule");

        if config.separate_blocks && !css.is_empty() {
            css.push('\n');
        }

        let indent_str = " ".repeat(config.indent);
        css.push_str(&format!("{selector} {{\n"));
        for (name, value) in self.properties.iter() {
            css.push_str(&format!("{indent_str}{name}: {value};\n"));
        }
        css.push_str("}\n");

        for child in &self.children {
            child.render_internal(css, &selector, config);
        }
    }
}

impl RuleContainer for CssRule {
    fn rules(&self) -> &[CssRule] {
        &self.children
    }

    fn rules_mut(&mut self) -> &mut Vec<CssRule> {
        &mut self.children
    }
}

/// Root of a rule tree. Emits no block of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<CssRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: CssRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn extend(&mut self, rules: impl IntoIterator<Item = CssRule>) -> &mut Self {
        self.rules.extend(rules);
        self
    }

    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            rule.render_internal(&mut css, "", config);
        }
        tracing::debug!(rules = self.rules.len(), bytes = css.len(), "rendered stylesheet");
        css
    }
}

impl RuleContainer for Stylesheet {
    fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut Vec<CssRule> {
        &mut self.rules
    }
}

impl FromIterator<CssRule> for Stylesheet {
    fn from_iter<T: IntoIterator<Item = CssRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
