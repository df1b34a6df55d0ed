//! Core data model types for quizbank.
//!
//! These are the fundamental types that the entire quizbank system uses
//! to represent questions, submitted answers, and per-topic tallies.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question in the bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// Topic label grouping the question (e.g. "Vectors").
    pub topic: String,
    /// The question text shown to the student.
    #[serde(default)]
    pub prompt: String,
    /// Answer choices shown to the student.
    #[serde(default)]
    pub choices: Vec<String>,
    /// The correct choice value, compared by exact string equality.
    pub answer: String,
}

/// One submitted answer: which question, and what the student picked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmission {
    /// Id of the question being answered.
    pub question_id: String,
    /// The choice the student selected.
    pub choice: String,
}

/// Correct/total tally for a single topic within one submission batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicStat {
    /// Correctly answered questions for this topic.
    pub correct: u32,
    /// Matched submissions for this topic (unknown ids never reach here).
    pub total: u32,
}

impl TopicStat {
    /// Percentage score for this topic. `total` is always nonzero for a
    /// topic that appears in a batch tally.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}
