pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod fixtures;
pub mod types;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use duration::duration_days;
pub use error::{StudioError, StudioResult};
