pub mod common;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod predict;
pub mod survey;
