//! Mastery smoothing.
//!
//! A student's mastery of a topic is a persisted value in [0, 100] that is
//! only ever updated by blending the previous value with the latest batch
//! score. It is never set directly from a raw percentage.

use crate::scoring::round2;

/// Prior mastery for a topic the student has never been scored on.
pub const DEFAULT_MASTERY: f64 = 50.0;

/// Weight of the retained history in the blend. Fixed policy.
pub const HISTORY_WEIGHT: f64 = 0.4;

/// Weight of the latest batch performance in the blend. Fixed policy.
pub const LATEST_WEIGHT: f64 = 0.6;

/// Blend a previous mastery value with the latest topic score.
///
/// `round(0.4 * old + 0.6 * latest, 2)` — exponential smoothing with
/// fixed weights.
pub fn blend(old: f64, latest: f64) -> f64 {
    round2(HISTORY_WEIGHT * old + LATEST_WEIGHT * latest)
}
