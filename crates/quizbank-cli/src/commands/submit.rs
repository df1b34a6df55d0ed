//! The `quizbank submit` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizbank_core::model::AnswerSubmission;
use quizbank_core::report::SubmissionReport;

pub async fn execute(
    answers_path: PathBuf,
    student: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let (engine, config) = super::build_engine(config.as_deref())?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers file: {}", answers_path.display()))?;
    let answers: Vec<AnswerSubmission> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers file: {}", answers_path.display()))?;

    let student = student.as_deref().or(Some(config.default_student.as_str()));
    let report = engine.submit(student, &answers).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_summary(&report),
    }

    // Without an explicit --output, reports land in the configured
    // report directory under a timestamped name.
    let report_path = match output {
        Some(path) => path,
        None => {
            let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
            config.report_dir.join(format!("report-{timestamp}.json"))
        }
    };
    report.save_json(&report_path)?;
    eprintln!("Report saved to: {}", report_path.display());

    Ok(())
}

fn print_summary(report: &SubmissionReport) {
    println!(
        "Student {}: {}/{} correct, accuracy {:.2}%",
        report.student, report.correct, report.total_questions, report.accuracy
    );

    if report.recommendations.is_empty() {
        println!("No topics scored in this batch.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Batch Score", "Mastery", "Next Steps"]);

    // Stable row order for humans and tests
    let mut topics: Vec<_> = report.recommendations.iter().collect();
    topics.sort_by(|a, b| a.0.cmp(b.0));

    for (topic, outcome) in topics {
        table.add_row(vec![
            Cell::new(topic),
            Cell::new(format!("{:.2}%", outcome.score)),
            Cell::new(format!("{:.2}", outcome.updated_mastery)),
            Cell::new(outcome.recommendation.join("; ")),
        ]);
    }

    println!("{table}");
}
