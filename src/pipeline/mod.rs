//! Pipeline module - transaction loading and basket aggregation

pub mod error;
pub mod frequency;
pub mod loader;
pub mod pairs;
pub mod transaction;

pub use error::*;
pub use frequency::*;
pub use loader::*;
pub use pairs::*;
pub use transaction::*;
