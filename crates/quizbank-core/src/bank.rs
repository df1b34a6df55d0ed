//! Question bank loading and validation.
//!
//! The bank is loaded once at startup from a JSON file and is immutable
//! afterwards. Iteration order matches the source file; lookups by id go
//! through an index built at load time.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Question;

/// Immutable, in-memory collection of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

impl QuestionBank {
    /// Build a bank from an already-parsed question list.
    ///
    /// Later duplicates of an id are kept in the list (and reported by
    /// [`validate_bank`]) but do not shadow the first occurrence.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut by_id = HashMap::with_capacity(questions.len());
        for (idx, q) in questions.iter().enumerate() {
            by_id.entry(q.id.clone()).or_insert(idx);
        }
        Self { questions, by_id }
    }

    /// Load a bank from a JSON file containing an array of questions.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read question bank: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse question bank: {}", path.display()))
    }

    /// Parse a bank from a JSON string (useful for testing).
    pub fn parse(content: &str) -> Result<Self> {
        let questions: Vec<Question> =
            serde_json::from_str(content).context("question bank is not a JSON question array")?;
        Ok(Self::new(questions))
    }

    /// Look up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&idx| &self.questions[idx])
    }

    /// All questions, in source-file order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
///
/// Warnings never make a bank unusable; a question with problems still
/// serves and scores. The `validate` CLI command surfaces them.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question ids
    let mut seen_ids = std::collections::HashSet::new();
    for q in bank.questions() {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question id: {}", q.id),
            });
        }
    }

    // Check for empty prompts
    for q in bank.questions() {
        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "prompt is empty".into(),
            });
        }
    }

    // Check that the stored answer is one of the listed choices
    for q in bank.questions() {
        if !q.choices.is_empty() && !q.choices.contains(&q.answer) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("answer '{}' is not among the listed choices", q.answer),
            });
        }
    }

    // Check for empty topics
    for q in bank.questions() {
        if q.topic.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "topic is empty".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BANK: &str = r#"[
        {
            "id": "vec-1",
            "topic": "Vectors",
            "prompt": "Which quantity has both magnitude and direction?",
            "choices": ["Speed", "Velocity", "Distance", "Mass"],
            "answer": "Velocity"
        },
        {
            "id": "kin-1",
            "topic": "Kinematics",
            "prompt": "In v = u + at, what does a stand for?",
            "choices": ["Area", "Acceleration", "Amplitude"],
            "answer": "Acceleration"
        }
    ]"#;

    #[test]
    fn parse_valid_bank() {
        let bank = QuestionBank::parse(VALID_BANK).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get("vec-1").unwrap().topic, "Vectors");
        assert!(bank.get("missing").is_none());
    }

    #[test]
    fn order_is_preserved() {
        let bank = QuestionBank::parse(VALID_BANK).unwrap();
        let ids: Vec<&str> = bank.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["vec-1", "kin-1"]);
    }

    #[test]
    fn duplicate_id_keeps_first() {
        let bank = QuestionBank::new(vec![
            Question {
                id: "q1".into(),
                topic: "A".into(),
                prompt: "first".into(),
                choices: vec![],
                answer: "x".into(),
            },
            Question {
                id: "q1".into(),
                topic: "B".into(),
                prompt: "second".into(),
                choices: vec![],
                answer: "y".into(),
            },
        ]);
        assert_eq!(bank.get("q1").unwrap().topic, "A");
        let warnings = validate_bank(&bank);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_answer_not_in_choices() {
        let bank = QuestionBank::new(vec![Question {
            id: "q1".into(),
            topic: "Vectors".into(),
            prompt: "pick one".into(),
            choices: vec!["A".into(), "B".into()],
            answer: "C".into(),
        }]);
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("not among the listed choices")));
    }

    #[test]
    fn parse_malformed_json() {
        assert!(QuestionBank::parse("{not json]").is_err());
        assert!(QuestionBank::parse(r#"{"id": "q1"}"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, VALID_BANK).unwrap();

        let bank = QuestionBank::load(&path).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(QuestionBank::load(Path::new("nonexistent.json")).is_err());
    }
}
