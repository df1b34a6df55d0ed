//! Study recommendation selector.
//!
//! Maps a post-update mastery score to one of three fixed study plans by
//! threshold comparison. Lower bounds are inclusive: exactly 50 falls in
//! the reinforcement band, exactly 80 in the advance band.

/// Mastery below this gets the remedial plan.
pub const REMEDIAL_THRESHOLD: f64 = 50.0;

/// Mastery at or above this gets the advance plan.
pub const ADVANCE_THRESHOLD: f64 = 80.0;

/// Four-step remedial sequence for weak mastery.
pub const REMEDIAL_PLAN: &[&str] = &[
    "Start with concept map",
    "Read the short notes",
    "Solve 3 practice problems",
    "Take a mini-test",
];

/// Two-step reinforcement for middling mastery.
pub const REINFORCEMENT_PLAN: &[&str] = &[
    "Review key formulas",
    "Do 5 mixed practice problems",
];

/// Single congratulatory step for strong mastery.
pub const ADVANCE_PLAN: &[&str] = &["Great job! Move to the next topic."];

/// Select the study plan for an updated mastery score.
pub fn recommend(mastery: f64) -> &'static [&'static str] {
    if mastery < REMEDIAL_THRESHOLD {
        REMEDIAL_PLAN
    } else if mastery < ADVANCE_THRESHOLD {
        REINFORCEMENT_PLAN
    } else {
        ADVANCE_PLAN
    }
}
