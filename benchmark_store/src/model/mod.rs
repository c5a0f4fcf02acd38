//!
//! The benchmark history data model.
//!

pub mod dataset;
pub mod error;
