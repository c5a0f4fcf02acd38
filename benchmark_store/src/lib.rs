//!
//! The benchmark history store library.
//!

pub mod append;
pub mod comparison;
pub mod input;
pub mod model;
pub mod store;
pub mod tool;

pub use crate::append::outcome::Outcome as AppendOutcome;
pub use crate::append::Append;
pub use crate::comparison::row::Row as ComparisonRow;
pub use crate::comparison::threshold::Threshold;
pub use crate::comparison::Comparison;
pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::dataset::entry::bench::Bench;
pub use crate::model::dataset::entry::commit::person::Person;
pub use crate::model::dataset::entry::commit::Commit;
pub use crate::model::dataset::entry::Entry;
pub use crate::model::dataset::Dataset;
pub use crate::model::error::Error as ValidationError;
pub use crate::store::error::Error as StoreError;
pub use crate::store::script::PREFIX as SCRIPT_PREFIX;
pub use crate::store::Config as StoreConfig;
pub use crate::store::Store;
pub use crate::tool::Tool;

/// The default suite name.
pub const DEFAULT_SUITE: &str = "Benchmark";
