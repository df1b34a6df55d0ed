//! The `quizbank notes` command.
//!
//! Notes come from the built-in catalog and need neither the question
//! bank nor the progress store.

use anyhow::Result;

use quizbank_core::engine::TopicNotes;
use quizbank_core::notes::NotesCatalog;

pub fn execute(topic: String, format: String) -> Result<()> {
    let catalog = NotesCatalog::builtin();
    let result = TopicNotes {
        notes: catalog.lookup(&topic),
        topic,
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            println!("Notes for {}:", result.topic);
            for note in &result.notes {
                println!("  - {note}");
            }
        }
    }

    Ok(())
}
