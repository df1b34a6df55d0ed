//! Pure batch scoring against the question bank.
//!
//! Scoring has no side effects: it looks up each submitted answer in the
//! bank, tallies correctness per topic, and computes the overall accuracy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::model::{AnswerSubmission, TopicStat};

/// Result of scoring one submission batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchScore {
    /// Correctly answered questions across the batch.
    pub correct: u32,
    /// Raw number of submissions, including ones with unknown question ids.
    pub total_submitted: u32,
    /// `100 * correct / total_submitted`, rounded to 2 decimals.
    /// 0.0 for an empty batch.
    pub accuracy: f64,
    /// Per-topic tallies for matched submissions only.
    pub per_topic: HashMap<String, TopicStat>,
}

/// Round to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Score a batch of submissions against the bank.
///
/// Submissions whose question id is not in the bank are skipped: they count
/// toward `total_submitted` but never toward `correct` or any topic tally.
/// Correctness is exact string equality with no normalization.
pub fn score_batch(submissions: &[AnswerSubmission], bank: &QuestionBank) -> BatchScore {
    let total_submitted = submissions.len() as u32;
    let mut correct = 0u32;
    let mut per_topic: HashMap<String, TopicStat> = HashMap::new();

    for sub in submissions {
        let Some(question) = bank.get(&sub.question_id) else {
            tracing::debug!("unknown question id '{}', skipping", sub.question_id);
            continue;
        };

        let is_correct = sub.choice == question.answer;
        if is_correct {
            correct += 1;
        }

        let stat = per_topic.entry(question.topic.clone()).or_default();
        stat.total += 1;
        if is_correct {
            stat.correct += 1;
        }
    }

    // The denominator is the raw submitted count: invalid question ids
    // drag accuracy down rather than being forgiven.
    let accuracy = if total_submitted > 0 {
        round2(correct as f64 / total_submitted as f64 * 100.0)
    } else {
        0.0
    };

    BatchScore {
        correct,
        total_submitted,
        accuracy,
        per_topic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question {
                id: "v1".into(),
                topic: "Vectors".into(),
                prompt: "q".into(),
                choices: vec!["A".into(), "B".into()],
                answer: "A".into(),
            },
            Question {
                id: "v2".into(),
                topic: "Vectors".into(),
                prompt: "q".into(),
                choices: vec!["A".into(), "B".into()],
                answer: "B".into(),
            },
            Question {
                id: "k1".into(),
                topic: "Kinematics".into(),
                prompt: "q".into(),
                choices: vec!["A".into(), "B".into()],
                answer: "A".into(),
            },
        ])
    }

    fn sub(id: &str, choice: &str) -> AnswerSubmission {
        AnswerSubmission {
            question_id: id.into(),
            choice: choice.into(),
        }
    }

    #[test]
    fn empty_batch_scores_zero() {
        let score = score_batch(&[], &bank());
        assert_eq!(score.correct, 0);
        assert_eq!(score.total_submitted, 0);
        assert_eq!(score.accuracy, 0.0);
        assert!(score.per_topic.is_empty());
    }

    #[test]
    fn all_correct() {
        let score = score_batch(&[sub("v1", "A"), sub("v2", "B"), sub("k1", "A")], &bank());
        assert_eq!(score.correct, 3);
        assert_eq!(score.total_submitted, 3);
        assert_eq!(score.accuracy, 100.0);
        assert_eq!(score.per_topic["Vectors"].correct, 2);
        assert_eq!(score.per_topic["Vectors"].total, 2);
        assert_eq!(score.per_topic["Kinematics"].correct, 1);
    }

    #[test]
    fn partial_correct_per_topic() {
        let score = score_batch(&[sub("v1", "A"), sub("v2", "A"), sub("k1", "B")], &bank());
        assert_eq!(score.correct, 1);
        assert_eq!(score.accuracy, 33.33);
        assert_eq!(
            score.per_topic["Vectors"],
            TopicStat {
                correct: 1,
                total: 2
            }
        );
        assert_eq!(
            score.per_topic["Kinematics"],
            TopicStat {
                correct: 0,
                total: 1
            }
        );
    }

    #[test]
    fn unknown_ids_count_in_denominator_only() {
        let score = score_batch(&[sub("v1", "A"), sub("ghost", "A")], &bank());
        assert_eq!(score.correct, 1);
        assert_eq!(score.total_submitted, 2);
        assert_eq!(score.accuracy, 50.0);
        // The unknown id contributes to no topic tally
        assert_eq!(score.per_topic.len(), 1);
        assert_eq!(score.per_topic["Vectors"].total, 1);
    }

    #[test]
    fn only_unknown_ids() {
        let score = score_batch(&[sub("ghost", "A"), sub("phantom", "B")], &bank());
        assert_eq!(score.correct, 0);
        assert_eq!(score.total_submitted, 2);
        assert_eq!(score.accuracy, 0.0);
        assert!(score.per_topic.is_empty());
    }

    #[test]
    fn correctness_is_case_sensitive() {
        let score = score_batch(&[sub("v1", "a")], &bank());
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn correct_never_exceeds_total() {
        let score = score_batch(&[sub("v1", "A"), sub("v2", "B")], &bank());
        assert!(score.correct <= score.total_submitted);
    }

    #[test]
    fn round2_behaves() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(80.0), 80.0);
    }
}
