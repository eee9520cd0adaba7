pub use crate::config::RenderConfig;
pub use crate::error::StyleError;
pub use crate::styling::css::{CssRule, RuleContainer, Stylesheet};
pub use crate::styling::selector::{
    Attribute, AttributeFilter, PseudoClass, Selector, StyleClass, Tag, Tokenizer, attribute,
    class, id, join, pseudo, tag, union,
};
pub use crate::styling::shorthand::BorderStyle;
pub use crate::styling::tags::*;
