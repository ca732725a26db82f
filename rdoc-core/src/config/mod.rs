//! Injectable configuration values.

pub mod alias_config;
pub mod search_config;

pub use alias_config::{AliasConfig, AliasEntry};
pub use search_config::SearchConfig;
