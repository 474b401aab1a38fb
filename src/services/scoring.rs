//! Rule-based burnout scoring.
//!
//! `score = round_half_up((work_hours / 40) * 50 + (stress / 10) * 50)`, with
//! no clamping in either direction.

use serde_json::Value;

use crate::models::{PredictionInput, PredictionResult, RiskTier};

pub const DEFAULT_WORK_HOURS: f64 = 40.0;
pub const DEFAULT_STRESS: f64 = 5.0;

const BASELINE_HOURS: f64 = 40.0;
const STRESS_SCALE: f64 = 10.0;
const COMPONENT_WEIGHT: f64 = 50.0;

/// Loose numeric coercion of a JSON value.
///
/// Numbers pass through, strings are trimmed and parsed (an empty string is
/// zero), booleans are 1 or 0. Anything else is not a number. A result of
/// zero or a non-finite value is treated the same as "not a number", so the
/// caller's default applies.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    (number.is_finite() && number != 0.0).then_some(number)
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Computes the unclamped integer score.
pub fn compute_score(work_hours: f64, stress: f64) -> i64 {
    let raw = (work_hours / BASELINE_HOURS) * COMPONENT_WEIGHT
        + (stress / STRESS_SCALE) * COMPONENT_WEIGHT;
    // `as` saturates, which covers overflow to infinity for absurd inputs
    round_half_up(raw) as i64
}

/// Scores an input, substituting defaults for missing or unusable fields.
pub fn score_input(input: &PredictionInput) -> PredictionResult {
    let work_hours = coerce_number(input.work_hours.as_ref()).unwrap_or(DEFAULT_WORK_HOURS);
    let stress = coerce_number(input.stress.as_ref()).unwrap_or(DEFAULT_STRESS);
    let score = compute_score(work_hours, stress);

    PredictionResult {
        risk: RiskTier::from_score(score),
        score,
    }
}
