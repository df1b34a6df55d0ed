//! quizbank-store — Progress persistence backends and configuration.

pub mod config;
pub mod json;
pub mod memory;

pub use config::{load_config, load_config_from, QuizbankConfig};
pub use json::JsonProgressStore;
pub use memory::MemoryProgressStore;
