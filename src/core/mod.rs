pub mod demo;
pub mod stats;
pub mod store;

pub use crate::domain::model::{ClassStatistics, Grade, RollNo, StudentRecord};
pub use crate::domain::ports::{DemoEvent, Reporter};
pub use crate::utils::error::Result;
