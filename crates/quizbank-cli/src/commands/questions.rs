//! The `quizbank questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

pub fn execute(format: String, config: Option<PathBuf>) -> Result<()> {
    let (engine, _config) = super::build_engine(config.as_deref())?;
    let questions = engine.questions();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(questions)?);
        }
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Id", "Topic", "Prompt", "Choices"]);
            for q in questions {
                table.add_row(vec![
                    q.id.clone(),
                    q.topic.clone(),
                    q.prompt.clone(),
                    q.choices.join(" / "),
                ]);
            }
            println!("{table}");
            println!("{} questions", questions.len());
        }
    }

    Ok(())
}
