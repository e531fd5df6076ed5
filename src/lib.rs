//! cobasket: Market-Basket Analysis Library
//!
//! Counts the distinct transactions containing each item and, for every
//! ordered pair of items bought together, the co-occurrence count and the
//! conditional probability of the second item given the first.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
