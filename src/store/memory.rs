use std::sync::Mutex;

use chrono::NaiveDate;

use super::EmployeeStore;
use crate::model::{
    compensation::{Compensation, NewCompensation},
    employee::{Employee, NewEmployee, PersonalInfo},
    payroll::{NewPayroll, Payroll},
};

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    payrolls: Vec<Payroll>,
    compensations: Vec<Compensation>,
}

/// Test double for [`EmployeeStore`]. Enforces nothing the forms should be
/// checking themselves.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("in-memory store poisoned")
    }

    /// Insert a bare employee row directly.
    pub fn seed_employee(&self, id: u64, email: &str) -> Employee {
        self.seed(id, email, "unused-hash", false)
    }

    pub fn seed(&self, id: u64, email: &str, password_hash: &str, is_admin: bool) -> Employee {
        let employee = Employee {
            id,
            first_name: "Seed".into(),
            middle_name: None,
            last_name: format!("Employee{id}"),
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid date"),
            email: email.to_string(),
            street: "1 Seed Rd".into(),
            city: "Dover".into(),
            state: "DE".into(),
            zip: 19901,
            home_phone: None,
            cell_phone: "302-555-0000".into(),
            password_hash: password_hash.to_string(),
            is_admin,
        };
        self.tables().employees.push(employee.clone());
        employee
    }
}

impl EmployeeStore for InMemoryStore {
    async fn employee_exists(&self, id: u64) -> Result<bool, sqlx::Error> {
        Ok(self.tables().employees.iter().any(|e| e.id == id))
    }

    async fn email_in_use(&self, email: &str, except: Option<u64>) -> Result<bool, sqlx::Error> {
        Ok(self
            .tables()
            .employees
            .iter()
            .filter(|e| Some(e.id) != except)
            .any(|e| e.email.eq_ignore_ascii_case(email)))
    }

    async fn payroll_exists(&self, eid: u64) -> Result<bool, sqlx::Error> {
        Ok(self.tables().payrolls.iter().any(|p| p.eid == eid))
    }

    async fn find_employee(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self.tables().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self
            .tables()
            .employees
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert_employee(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let employee = new.clone().into_employee();
        self.tables().employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_personal_info(&self, id: u64, info: &PersonalInfo) -> Result<u64, sqlx::Error> {
        let mut tables = self.tables();
        let Some(e) = tables.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(0);
        };
        e.email = info.email.clone();
        e.first_name = info.first_name.clone();
        e.middle_name = info.middle_name.clone();
        e.last_name = info.last_name.clone();
        e.dob = info.dob;
        e.street = info.street.clone();
        e.city = info.city.clone();
        e.state = info.state.to_string();
        e.zip = info.zip;
        e.home_phone = info.home_phone.clone();
        e.cell_phone = info.cell_phone.clone();
        Ok(1)
    }

    async fn insert_payroll(&self, new: &NewPayroll) -> Result<Payroll, sqlx::Error> {
        let mut tables = self.tables();
        let payroll = Payroll {
            id: tables.payrolls.len() as u64 + 1,
            eid: new.eid,
            account_type: new.account_type.to_string(),
            account_num: new.account_num.clone(),
            routing_num: new.routing_num.clone(),
            amount_withheld: new.amount_withheld,
            num_allowances: new.num_allowances,
            claim_exemption: new.claim_exemption,
        };
        tables.payrolls.push(payroll.clone());
        Ok(payroll)
    }

    async fn find_payroll(&self, eid: u64) -> Result<Option<Payroll>, sqlx::Error> {
        Ok(self.tables().payrolls.iter().find(|p| p.eid == eid).cloned())
    }

    async fn insert_compensation(&self, new: &NewCompensation) -> Result<Compensation, sqlx::Error> {
        let mut tables = self.tables();
        let compensation = Compensation {
            id: tables.compensations.len() as u64 + 1,
            eid: new.eid,
            start_date: new.start_date,
            end_date: new.end_date,
            net_pay: new.net_pay,
            gross_pay: new.gross_pay,
            hourly_wage: new.hourly_wage,
            hours_worked: new.hours_worked,
        };
        tables.compensations.push(compensation.clone());
        Ok(compensation)
    }

    async fn list_compensations(&self, eid: u64) -> Result<Vec<Compensation>, sqlx::Error> {
        let mut rows: Vec<Compensation> = self
            .tables()
            .compensations
            .iter()
            .filter(|c| c.eid == eid)
            .cloned()
            .collect();
        rows.sort_by_key(|c| (c.start_date, c.id));
        Ok(rows)
    }
}
