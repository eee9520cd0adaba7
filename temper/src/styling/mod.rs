pub mod css;
pub mod properties;
pub mod selector;
pub mod shorthand;
pub mod store;
pub mod tags;

pub use css::*;
pub use selector::*;
pub use shorthand::*;
pub use store::*;
