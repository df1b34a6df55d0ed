//! Central quiz engine.
//!
//! Ties the immutable question bank and notes catalog to a progress store
//! and exposes the boundary operations: submit a batch, read progress,
//! list questions, fetch notes.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::bank::QuestionBank;
use crate::mastery::{blend, DEFAULT_MASTERY};
use crate::model::{AnswerSubmission, Question};
use crate::notes::NotesCatalog;
use crate::recommend::recommend;
use crate::report::{SubmissionReport, TopicOutcome};
use crate::scoring::score_batch;
use crate::traits::ProgressStore;

/// Student id used when the caller does not supply one.
pub const DEFAULT_STUDENT: &str = "guest";

/// Notes for one topic, as returned by [`QuizEngine::notes`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TopicNotes {
    pub topic: String,
    pub notes: Vec<String>,
}

/// The central quiz engine.
pub struct QuizEngine {
    bank: QuestionBank,
    catalog: NotesCatalog,
    store: Arc<dyn ProgressStore>,
}

impl QuizEngine {
    pub fn new(bank: QuestionBank, catalog: NotesCatalog, store: Arc<dyn ProgressStore>) -> Self {
        Self {
            bank,
            catalog,
            store,
        }
    }

    /// The full question collection, in bank order.
    pub fn questions(&self) -> &[Question] {
        self.bank.questions()
    }

    /// Notes for a topic; unknown topics get the one-item fallback list.
    pub fn notes(&self, topic: &str) -> TopicNotes {
        TopicNotes {
            topic: topic.to_string(),
            notes: self.catalog.lookup(topic),
        }
    }

    /// A student's topic → mastery map; empty if the student has never
    /// submitted.
    pub async fn progress(&self, student: &str) -> Result<HashMap<String, f64>> {
        let progress = self.store.load().await?;
        Ok(progress.get(student).cloned().unwrap_or_default())
    }

    /// Score a submission batch, blend each topic's score into the stored
    /// mastery, persist the updated progress, and report per-topic
    /// recommendations.
    ///
    /// The read-modify-write over the store is not atomic: two concurrent
    /// submissions for the same student race, and the later write wins.
    pub async fn submit(
        &self,
        student: Option<&str>,
        answers: &[AnswerSubmission],
    ) -> Result<SubmissionReport> {
        let student = student.unwrap_or(DEFAULT_STUDENT);
        let score = score_batch(answers, &self.bank);

        let mut recommendations = HashMap::new();

        // A batch with no matched submissions updates nothing, so the
        // store is left untouched.
        if !score.per_topic.is_empty() {
            let mut progress = self.store.load().await?;
            let student_progress = progress.entry(student.to_string()).or_default();

            for (topic, stat) in &score.per_topic {
                let topic_score = stat.percent();
                let old = student_progress
                    .get(topic)
                    .copied()
                    .unwrap_or(DEFAULT_MASTERY);
                let updated = blend(old, topic_score);
                student_progress.insert(topic.clone(), updated);

                recommendations.insert(
                    topic.clone(),
                    TopicOutcome {
                        score: topic_score,
                        updated_mastery: updated,
                        recommendation: recommend(updated)
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    },
                );
            }

            self.store.save(&progress).await?;
        }

        tracing::info!(
            student,
            correct = score.correct,
            total = score.total_submitted,
            accuracy = score.accuracy,
            "submission scored"
        );

        Ok(SubmissionReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            student: student.to_string(),
            total_questions: score.total_submitted,
            correct: score.correct,
            accuracy: score.accuracy,
            recommendations,
        })
    }
}
