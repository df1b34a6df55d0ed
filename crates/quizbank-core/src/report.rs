//! Submission report types with JSON persistence.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The aggregate result of one scored submission batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the submission was scored.
    pub created_at: DateTime<Utc>,
    /// The student the batch was submitted for.
    pub student: String,
    /// Raw number of submitted answers, including unknown question ids.
    pub total_questions: u32,
    /// Correctly answered questions.
    pub correct: u32,
    /// Overall accuracy percentage, rounded to 2 decimals.
    pub accuracy: f64,
    /// Per-topic outcome for every topic present in the batch.
    pub recommendations: HashMap<String, TopicOutcome>,
}

/// Outcome for a single topic within a submission batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicOutcome {
    /// This batch's raw topic score percentage.
    pub score: f64,
    /// Mastery after blending this batch into the stored value.
    pub updated_mastery: f64,
    /// The selected study plan.
    pub recommendation: Vec<String>,
}

impl SubmissionReport {
    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SubmissionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
