pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::persist::JsonStore;
pub use domain::events::Event;
pub use domain::model::{Course, Gradebook, School, TestRecord};
pub use utils::error::{GradebookError, Result};
