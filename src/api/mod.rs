pub mod dashboard;
pub mod payroll;
pub mod performance;
