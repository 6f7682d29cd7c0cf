//! Persistence seam used by the forms' record-level checks and by the
//! handlers. MySQL in production; an in-memory map under test.

#[cfg(test)]
pub mod memory;
pub mod mysql;

use crate::model::{
    compensation::{Compensation, NewCompensation},
    employee::{Employee, NewEmployee, PersonalInfo},
    payroll::{NewPayroll, Payroll},
};

#[allow(async_fn_in_trait)]
pub trait EmployeeStore {
    async fn employee_exists(&self, id: u64) -> Result<bool, sqlx::Error>;

    /// Email comparison is case-insensitive. `except` excludes one employee,
    /// so an edit may keep its own address.
    async fn email_in_use(&self, email: &str, except: Option<u64>) -> Result<bool, sqlx::Error>;

    async fn payroll_exists(&self, eid: u64) -> Result<bool, sqlx::Error>;

    async fn find_employee(&self, id: u64) -> Result<Option<Employee>, sqlx::Error>;

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error>;

    async fn insert_employee(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error>;

    /// Returns the number of rows changed.
    async fn update_personal_info(&self, id: u64, info: &PersonalInfo) -> Result<u64, sqlx::Error>;

    async fn insert_payroll(&self, new: &NewPayroll) -> Result<Payroll, sqlx::Error>;

    async fn find_payroll(&self, eid: u64) -> Result<Option<Payroll>, sqlx::Error>;

    async fn insert_compensation(&self, new: &NewCompensation) -> Result<Compensation, sqlx::Error>;

    /// Pay history for one employee, oldest period first.
    async fn list_compensations(&self, eid: u64) -> Result<Vec<Compensation>, sqlx::Error>;
}

/// MySQL reports unique-key violations as SQLSTATE 23000.
pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23000") => {
            Some(db_err.message())
        }
        _ => None,
    }
}
