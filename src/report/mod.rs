//! Report module - result tables, run summary, and exports

pub mod basket_export;
pub mod summary;
pub mod tables;

pub use basket_export::*;
pub use summary::*;
pub use tables::*;
