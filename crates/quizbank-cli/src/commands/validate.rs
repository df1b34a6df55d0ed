//! The `quizbank validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizbank_core::bank::{validate_bank, QuestionBank};
use quizbank_store::load_config_from;

pub fn execute(bank_path: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let path = match bank_path {
        Some(p) => p,
        None => load_config_from(config.as_deref())?.questions_path,
    };

    println!("Validating {}", path.display());
    let bank = QuestionBank::load(&path)?;
    println!("  {} questions", bank.len());

    let warnings = validate_bank(&bank);
    for w in &warnings {
        match &w.question_id {
            Some(id) => println!("  warning [{id}]: {}", w.message),
            None => println!("  warning: {}", w.message),
        }
    }

    if warnings.is_empty() {
        println!("Question bank valid");
    } else {
        println!("{} warnings found", warnings.len());
    }

    Ok(())
}
