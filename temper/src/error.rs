use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Element has no attribute {0}")]
    UndefinedAttribute(String),
    #[error("Selector {0} is not a class")]
    NotAClass(String),
    #[error("Invalid {property} property: {token}")]
    InvalidToken { property: String, token: String },
}
