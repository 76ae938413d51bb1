pub mod config_service;
pub mod paths;
pub mod storage;
pub mod style_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::StylebookPaths;
pub use crate::storage::{InMemoryKeyValueStore, JsonFileKeyValueStore};
pub use crate::style_repository::{InMemoryStyleRepository, load_styles};
