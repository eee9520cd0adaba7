use crate::error::StyleError;
use std::fmt::{Display, Formatter};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Any fragment that renders as CSS selector text.
///
/// Values are immutable and compare structurally; `Display` yields the
/// canonical external form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Tag(Tag),
    Id(String),
    Class(String),
    Pseudo(PseudoClass),
    Attribute(Attribute),
    /// Two classes that must both match, written as `.a .b`.
    Composite(Box<StyleClass>, Box<StyleClass>),
    /// Comma list in caller order, wrapped in parentheses.
    Union(Vec<Selector>),
    /// A tag plus the traits applying to the same element.
    Simple { tag: Tag, traits: Vec<Selector> },
}

impl Selector {
    pub fn simple<S: Into<Selector>>(tag: Tag, traits: impl IntoIterator<Item = S>) -> Self {
        Selector::Simple {
            tag,
            traits: traits.into_iter().map(Into::into).collect(),
        }
    }

    pub fn external_form(&self) -> String {
        self.to_string()
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Tag(tag) => write!(f, "{tag}"),
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Pseudo(pseudo) => write!(f, ":{pseudo}"),
            Selector::Attribute(attribute) => write!(f, "{attribute}"),
            Selector::Composite(a, b) => write!(f, "{a} {b}"),
            Selector::Union(selectors) => {
                let forms = selectors
                    .iter()
                    .map(Selector::external_form)
                    .collect::<Vec<_>>();
                write!(f, "({})", forms.join(","))
            }
            Selector::Simple { tag, traits } => {
                let mut text = String::new();
                if !tag.is_any() {
                    text.push_str(tag.name());
                }
                for t in traits {
                    text.push_str(&t.external_form());
                }
                if text.is_empty() && tag.is_any() {
                    text.push_str(Tag::ANY);
                }
                f.write_str(&text)
            }
        }
    }
}

/// A class-like fragment: the only operands a composite accepts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Named(String),
    Pseudo(PseudoClass),
    Composite(Box<StyleClass>, Box<StyleClass>),
}

impl StyleClass {
    /// Composite names are space joined.
    pub fn name(&self) -> String {
        match self {
            StyleClass::Named(name) => name.clone(),
            StyleClass::Pseudo(pseudo) => pseudo.as_ref().to_string(),
            StyleClass::Composite(a, b) => format!("{} {}", a.name(), b.name()),
        }
    }

    pub fn external_form(&self) -> String {
        self.to_string()
    }

    /// Combines with another class into a composite.
    pub fn and(self, other: impl Into<StyleClass>) -> Self {
        StyleClass::Composite(Box::new(self), Box::new(other.into()))
    }
}

impl Display for StyleClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleClass::Named(name) => write!(f, ".{name}"),
            StyleClass::Pseudo(pseudo) => write!(f, ":{pseudo}"),
            StyleClass::Composite(a, b) => write!(f, "{a} {b}"),
        }
    }
}

impl From<StyleClass> for Selector {
    fn from(value: StyleClass) -> Self {
        match value {
            StyleClass::Named(name) => Selector::Class(name),
            StyleClass::Pseudo(pseudo) => Selector::Pseudo(pseudo),
            StyleClass::Composite(a, b) => Selector::Composite(a, b),
        }
    }
}

impl From<PseudoClass> for StyleClass {
    fn from(value: PseudoClass) -> Self {
        StyleClass::Pseudo(value)
    }
}

impl TryFrom<Selector> for StyleClass {
    type Error = StyleError;

    fn try_from(value: Selector) -> Result<Self, Self::Error> {
        match value {
            Selector::Class(name) => Ok(StyleClass::Named(name)),
            Selector::Pseudo(pseudo) => Ok(StyleClass::Pseudo(pseudo)),
            Selector::Composite(a, b) => Ok(StyleClass::Composite(a, b)),
            other => Err(StyleError::NotAClass(other.external_form())),
        }
    }
}

/// Joins two optional classes; an absent side is the identity.
pub fn join(a: Option<StyleClass>, b: Option<StyleClass>) -> Option<StyleClass> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (Some(a), Some(b)) => Some(a.and(b)),
    }
}

/// Element name. `*` matches any element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub const ANY: &'static str = "*";

    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_any(&self) -> bool {
        self.0 == Self::ANY
    }

    pub fn with<S: Into<Selector>>(self, traits: impl IntoIterator<Item = S>) -> Selector {
        Selector::simple(self, traits)
    }

    pub fn id(self, name: &str) -> Selector {
        self.with([id(name)])
    }

    /// The whole string becomes a single class fragment, spaces included.
    pub fn classes(self, classes: &str) -> Selector {
        self.with([class(classes)])
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Names render kebab-case (`:first-child`), not as the variant name.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PseudoClass {
    Root,
    FirstChild,
    LastChild,
    FirstOfType,
    LastOfType,
    OnlyChild,
    OnlyOfType,
    Empty,
    Link,
    Visited,
    Active,
    Focus,
    Hover,
    Target,
    Enabled,
    Disabled,
    Checked,
}

/// Which "contains" operator an attribute filter emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tokenizer {
    Substring,
    HyphenList,
    SpaceList,
}

impl Tokenizer {
    pub fn operator(self) -> &'static str {
        match self {
            Tokenizer::Substring => "*=",
            Tokenizer::HyphenList => "|=",
            Tokenizer::SpaceList => "~=",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeFilter {
    HasAttribute,
    Equals(String),
    StartsWith(String),
    EndsWith(String),
    Contains(String, Tokenizer),
}

impl Display for AttributeFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeFilter::HasAttribute => Ok(()),
            AttributeFilter::Equals(value) => write!(f, "={value}"),
            AttributeFilter::StartsWith(value) => write!(f, "^={value}"),
            AttributeFilter::EndsWith(value) => write!(f, "$={value}"),
            AttributeFilter::Contains(value, tokenizer) => {
                write!(f, "{}{value}", tokenizer.operator())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    filter: AttributeFilter,
}

impl Attribute {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            filter: AttributeFilter::HasAttribute,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filter(&self) -> &AttributeFilter {
        &self.filter
    }

    fn filtered(self, filter: AttributeFilter) -> Self {
        Self { filter, ..self }
    }

    pub fn has_attribute(self) -> Self {
        self.filtered(AttributeFilter::HasAttribute)
    }

    pub fn equals(self, value: &str) -> Self {
        self.filtered(AttributeFilter::Equals(value.to_string()))
    }

    pub fn starts_with(self, value: &str) -> Self {
        self.filtered(AttributeFilter::StartsWith(value.to_string()))
    }

    pub fn ends_with(self, value: &str) -> Self {
        self.filtered(AttributeFilter::EndsWith(value.to_string()))
    }

    pub fn contains(self, value: &str, tokenizer: Tokenizer) -> Self {
        self.filtered(AttributeFilter::Contains(value.to_string(), tokenizer))
    }

    pub fn contains_in_hyphens(self, value: &str) -> Self {
        self.contains(value, Tokenizer::HyphenList)
    }

    pub fn contains_in_spaces(self, value: &str) -> Self {
        self.contains(value, Tokenizer::SpaceList)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}{}]", self.name, self.filter)
    }
}

impl From<Tag> for Selector {
    fn from(value: Tag) -> Self {
        Selector::Tag(value)
    }
}

impl From<PseudoClass> for Selector {
    fn from(value: PseudoClass) -> Self {
        Selector::Pseudo(value)
    }
}

impl From<Attribute> for Selector {
    fn from(value: Attribute) -> Self {
        Selector::Attribute(value)
    }
}

pub fn tag(name: &str) -> Tag {
    Tag::new(name)
}

pub fn id(name: &str) -> Selector {
    Selector::Id(name.to_string())
}

pub fn class(name: &str) -> StyleClass {
    StyleClass::Named(name.to_string())
}

pub fn pseudo(pseudo: PseudoClass) -> Selector {
    Selector::Pseudo(pseudo)
}

pub fn attribute(name: &str) -> Attribute {
    Attribute::new(name)
}

pub fn union<S: Into<Selector>>(selectors: impl IntoIterator<Item = S>) -> Selector {
    Selector::Union(selectors.into_iter().map(Into::into).collect())
}
