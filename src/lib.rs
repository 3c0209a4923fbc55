pub mod column_mapping;
pub mod config;
pub mod context;
pub mod database_schema;
pub mod dicts;
pub mod error;
pub mod generator;
pub mod menu;
pub mod naming;
pub mod template_planner;
pub mod toml_generator;
pub mod types;

pub use config::{DbDialect, GenConfig};
pub use error::{Error, Result};
