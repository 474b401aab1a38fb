use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::WorkforceRepository;
use crate::errors::ServiceError;
use crate::models::{DashboardSummary, DepartmentRisk, EmployeeRecord, RiskTier};

/// Serves the fixed demo roster and summary used by the dashboard.
#[derive(Debug, Clone, Default)]
pub struct StaticWorkforceRepository;

impl StaticWorkforceRepository {
    pub fn new() -> Self {
        Self
    }

    fn summary() -> DashboardSummary {
        let department_breakdown = [
            ("Engineering", DepartmentRisk::new(5, 6, 4)),
            ("Marketing", DepartmentRisk::new(3, 4, 3)),
            ("Sales", DepartmentRisk::new(2, 5, 2)),
            ("HR", DepartmentRisk::new(1, 1, 3)),
            ("Finance", DepartmentRisk::new(1, 2, 3)),
        ]
        .into_iter()
        .map(|(name, risk)| (name.to_string(), risk))
        .collect::<BTreeMap<_, _>>();

        DashboardSummary {
            total_employees: 150,
            surveys_submitted: 45,
            high_risk_count: 12,
            medium_risk_count: 18,
            low_risk_count: 15,
            avg_work_hours: 42.5,
            avg_stress_level: 6.2,
            department_breakdown,
        }
    }

    fn employees() -> Result<Vec<EmployeeRecord>, ServiceError> {
        let roster = [
            (1, "John Doe", "john.doe@company.com", "Engineering", 48.0, 8.0, RiskTier::High, (2024, 1, 15)),
            (2, "Jane Smith", "jane.smith@company.com", "Marketing", 42.0, 5.0, RiskTier::Medium, (2024, 1, 14)),
            (3, "Bob Johnson", "bob.johnson@company.com", "Sales", 38.0, 3.0, RiskTier::Low, (2024, 1, 13)),
        ];

        roster
            .into_iter()
            .map(
                |(id, name, email, department, work_hours, stress_level, burnout_risk, (y, m, d))|
                 -> Result<EmployeeRecord, ServiceError> {
                    let last_survey_date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                        ServiceError::InternalError(format!("invalid survey date {y}-{m}-{d}"))
                    })?;
                    Ok(EmployeeRecord {
                        id,
                        name: name.to_string(),
                        email: email.to_string(),
                        department: department.to_string(),
                        work_hours,
                        stress_level,
                        burnout_risk,
                        last_survey_date,
                    })
                },
            )
            .collect()
    }
}

#[async_trait]
impl WorkforceRepository for StaticWorkforceRepository {
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ServiceError> {
        Ok(Self::summary())
    }

    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ServiceError> {
        Self::employees()
    }
}
