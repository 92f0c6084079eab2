pub mod payroll;
pub mod performance;
