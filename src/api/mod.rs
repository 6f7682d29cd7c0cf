pub mod compensation;
pub mod employee;
pub mod payroll;
