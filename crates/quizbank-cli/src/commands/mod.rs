//! CLI command implementations.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use quizbank_core::bank::QuestionBank;
use quizbank_core::engine::QuizEngine;
use quizbank_core::notes::NotesCatalog;
use quizbank_store::{load_config_from, JsonProgressStore, QuizbankConfig};

pub mod init;
pub mod notes;
pub mod progress;
pub mod questions;
pub mod submit;
pub mod validate;

/// Load config and assemble the engine with the file-backed store.
pub(crate) fn build_engine(config_path: Option<&Path>) -> Result<(QuizEngine, QuizbankConfig)> {
    let config = load_config_from(config_path)?;
    let bank = QuestionBank::load(&config.questions_path)?;
    let store = Arc::new(JsonProgressStore::new(&config.progress_path));
    let engine = QuizEngine::new(bank, NotesCatalog::builtin(), store);
    Ok((engine, config))
}
