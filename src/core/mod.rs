pub mod demo;
pub mod persist;
pub mod store;

pub use crate::domain::events::Event;
pub use crate::domain::model::{Course, Gradebook, School, TestRecord};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
