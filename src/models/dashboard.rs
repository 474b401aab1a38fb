use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Per-department count of employees in each risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentRisk {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl DepartmentRisk {
    pub fn new(high: u32, medium: u32, low: u32) -> Self {
        Self { high, medium, low }
    }

    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

/// Aggregate statistics for the HR dashboard.
///
/// Counts are reported as-is; nothing checks that the tier counts add up to
/// `surveys_submitted` or that the department breakdown matches the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummary {
    pub total_employees: u32,
    pub surveys_submitted: u32,
    pub high_risk_count: u32,
    pub medium_risk_count: u32,
    pub low_risk_count: u32,
    pub avg_work_hours: f64,
    pub avg_stress_level: f64,
    pub department_breakdown: BTreeMap<String, DepartmentRisk>,
}
