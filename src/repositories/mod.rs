use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::models::{DashboardSummary, EmployeeRecord};

pub mod workforce_repository;

pub use workforce_repository::StaticWorkforceRepository;

/// Source of roster and dashboard data for the read endpoints.
#[async_trait]
pub trait WorkforceRepository: Send + Sync {
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ServiceError>;
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ServiceError>;
}
