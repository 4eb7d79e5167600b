pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};
pub use crate::config::ScriptConfig;

pub use crate::adapters::{JsonReporter, TextReporter};
pub use crate::core::{
    demo::{DemoQueries, DemoRunner, DemoScript},
    store::StudentStore,
};
pub use crate::domain::model::{ClassStatistics, Grade, RollNo, StudentRecord};
pub use crate::domain::ports::{DemoEvent, Reporter};
pub use crate::utils::error::{Result, RosterError};
