pub mod config;
pub mod error;
pub mod prelude;
pub mod styling;

pub use config::*;
pub use error::*;
pub use styling::*;
