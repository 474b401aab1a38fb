use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Burnout risk tier derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Score at or above which a result is classified `High`.
    pub const HIGH_THRESHOLD: i64 = 70;
    /// Score at or above which a result is classified `Medium`.
    pub const MEDIUM_THRESHOLD: i64 = 40;

    /// Classifies a score. Lower bounds are inclusive.
    pub fn from_score(score: i64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            RiskTier::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An employee as shown on the dashboard roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    pub work_hours: f64,
    /// Self-reported stress on a 0-10 scale
    pub stress_level: f64,
    pub burnout_risk: RiskTier,
    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub last_survey_date: NaiveDate,
}
