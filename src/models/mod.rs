// Core models
pub mod dashboard;
pub mod employee;
pub mod prediction;

pub use dashboard::{DashboardSummary, DepartmentRisk};
pub use employee::{EmployeeRecord, RiskTier};
pub use prediction::{NotificationPayload, PredictionInput, PredictionResult};
