//! Static topical notes catalog.
//!
//! Lookup is by exact topic string; an unknown topic yields a one-element
//! placeholder list rather than an error. No fuzzy matching, no case
//! normalization.

use std::collections::HashMap;

/// Placeholder returned for topics with no notes.
pub const NO_NOTES_FALLBACK: &str = "No notes found for this topic.";

/// Topic name to ordered note strings.
#[derive(Debug, Clone)]
pub struct NotesCatalog {
    notes: HashMap<String, Vec<String>>,
}

impl NotesCatalog {
    /// The built-in physics notes catalog.
    pub fn builtin() -> Self {
        let mut notes = HashMap::new();
        notes.insert(
            "Vectors".to_string(),
            vec![
                "Vectors have both magnitude and direction.".to_string(),
                "They can be added using head-to-tail or components.".to_string(),
                "Examples: velocity, acceleration, force.".to_string(),
            ],
        );
        notes.insert(
            "Projectile Motion".to_string(),
            vec![
                "Horizontal and vertical motions are independent.".to_string(),
                "Range R = (v^2 * sin(2θ)) / g on level ground.".to_string(),
                "Time of flight T = (2v * sinθ) / g.".to_string(),
            ],
        );
        notes.insert(
            "Kinematics".to_string(),
            vec![
                "Displacement vs distance: displacement is vector.".to_string(),
                "Equations: v = u + at, s = ut + ½at², v² = u² + 2as.".to_string(),
                "Acceleration is change of velocity per unit time.".to_string(),
            ],
        );
        Self { notes }
    }

    /// Build a catalog from an explicit mapping.
    pub fn new(notes: HashMap<String, Vec<String>>) -> Self {
        Self { notes }
    }

    /// Notes for a topic, or the one-item fallback for an unknown topic.
    pub fn lookup(&self, topic: &str) -> Vec<String> {
        self.notes
            .get(topic)
            .cloned()
            .unwrap_or_else(|| vec![NO_NOTES_FALLBACK.to_string()])
    }

    /// Topics that have notes.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.notes.keys().map(String::as_str)
    }
}
