pub mod compensation;
pub mod employee;
pub mod payroll;
pub mod us_state;
