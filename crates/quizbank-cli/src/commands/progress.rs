//! The `quizbank progress` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub async fn execute(student: String, format: String, config: Option<PathBuf>) -> Result<()> {
    let (engine, _config) = super::build_engine(config.as_deref())?;
    let progress = engine.progress(&student).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&progress)?),
        _ => {
            if progress.is_empty() {
                println!("No recorded progress for {student}");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Topic", "Mastery"]);

            let mut topics: Vec<_> = progress.iter().collect();
            topics.sort_by(|a, b| a.0.cmp(b.0));
            for (topic, mastery) in topics {
                table.add_row(vec![Cell::new(topic), Cell::new(format!("{mastery:.2}"))]);
            }

            println!("{table}");
        }
    }

    Ok(())
}
