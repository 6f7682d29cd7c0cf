use sqlx::MySqlPool;
use tracing::debug;

use super::EmployeeStore;
use crate::model::{
    compensation::{Compensation, NewCompensation},
    employee::{Employee, NewEmployee, PersonalInfo},
    payroll::{NewPayroll, Payroll},
};

impl EmployeeStore for MySqlPool {
    async fn employee_exists(&self, id: u64) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employee WHERE id = ?")
            .bind(id)
            .fetch_one(self)
            .await?;
        Ok(count > 0)
    }

    async fn email_in_use(&self, email: &str, except: Option<u64>) -> Result<bool, sqlx::Error> {
        let count = match except {
            Some(id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM employee WHERE LOWER(email) = LOWER(?) AND id <> ?",
                )
                .bind(email)
                .bind(id)
                .fetch_one(self)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM employee WHERE LOWER(email) = LOWER(?)",
                )
                .bind(email)
                .fetch_one(self)
                .await?
            }
        };
        Ok(count > 0)
    }

    async fn payroll_exists(&self, eid: u64) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM payroll_info WHERE eid = ?")
            .bind(eid)
            .fetch_one(self)
            .await?;
        Ok(count > 0)
    }

    async fn find_employee(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, middle_name, last_name, dob, email, street, city,
                   state, zip, home_phone, cell_phone, password_hash, is_admin
            FROM employee
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self)
        .await
    }

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, middle_name, last_name, dob, email, street, city,
                   state, zip, home_phone, cell_phone, password_hash, is_admin
            FROM employee
            WHERE LOWER(email) = LOWER(?)
            "#,
        )
        .bind(email)
        .fetch_optional(self)
        .await
    }

    async fn insert_employee(&self, new: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let info = &new.info;
        sqlx::query(
            r#"
            INSERT INTO employee
            (id, first_name, middle_name, last_name, dob, email, street, city,
             state, zip, home_phone, cell_phone, password_hash, is_admin)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, FALSE)
            "#,
        )
        .bind(new.id)
        .bind(&info.first_name)
        .bind(&info.middle_name)
        .bind(&info.last_name)
        .bind(info.dob)
        .bind(&info.email)
        .bind(&info.street)
        .bind(&info.city)
        .bind(info.state.as_ref())
        .bind(info.zip)
        .bind(&info.home_phone)
        .bind(&info.cell_phone)
        .bind(&new.password_hash)
        .execute(self)
        .await?;

        debug!(employee_id = new.id, "Employee row inserted");
        Ok(new.clone().into_employee())
    }

    async fn update_personal_info(&self, id: u64, info: &PersonalInfo) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE employee
            SET first_name = ?, middle_name = ?, last_name = ?, dob = ?, email = ?,
                street = ?, city = ?, state = ?, zip = ?, home_phone = ?, cell_phone = ?
            WHERE id = ?
            "#,
        )
        .bind(&info.first_name)
        .bind(&info.middle_name)
        .bind(&info.last_name)
        .bind(info.dob)
        .bind(&info.email)
        .bind(&info.street)
        .bind(&info.city)
        .bind(info.state.as_ref())
        .bind(info.zip)
        .bind(&info.home_phone)
        .bind(&info.cell_phone)
        .bind(id)
        .execute(self)
        .await?;

        Ok(result.rows_affected())
    }

    async fn insert_payroll(&self, new: &NewPayroll) -> Result<Payroll, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO payroll_info
            (eid, account_type, account_num, routing_num, amount_withheld, num_allowances, claim_exemption)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.eid)
        .bind(new.account_type.as_ref())
        .bind(&new.account_num)
        .bind(&new.routing_num)
        .bind(new.amount_withheld)
        .bind(new.num_allowances)
        .bind(new.claim_exemption)
        .execute(self)
        .await?;

        Ok(Payroll {
            id: result.last_insert_id(),
            eid: new.eid,
            account_type: new.account_type.to_string(),
            account_num: new.account_num.clone(),
            routing_num: new.routing_num.clone(),
            amount_withheld: new.amount_withheld,
            num_allowances: new.num_allowances,
            claim_exemption: new.claim_exemption,
        })
    }

    async fn find_payroll(&self, eid: u64) -> Result<Option<Payroll>, sqlx::Error> {
        sqlx::query_as::<_, Payroll>(
            r#"
            SELECT id, eid, account_type, account_num, routing_num,
                   amount_withheld, num_allowances, claim_exemption
            FROM payroll_info
            WHERE eid = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(eid)
        .fetch_optional(self)
        .await
    }

    async fn insert_compensation(&self, new: &NewCompensation) -> Result<Compensation, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO compensation_info
            (eid, start_date, end_date, net_pay, gross_pay, hourly_wage, hours_worked)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.eid)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.net_pay)
        .bind(new.gross_pay)
        .bind(new.hourly_wage)
        .bind(new.hours_worked)
        .execute(self)
        .await?;

        Ok(Compensation {
            id: result.last_insert_id(),
            eid: new.eid,
            start_date: new.start_date,
            end_date: new.end_date,
            net_pay: new.net_pay,
            gross_pay: new.gross_pay,
            hourly_wage: new.hourly_wage,
            hours_worked: new.hours_worked,
        })
    }

    async fn list_compensations(&self, eid: u64) -> Result<Vec<Compensation>, sqlx::Error> {
        sqlx::query_as::<_, Compensation>(
            r#"
            SELECT id, eid, start_date, end_date, net_pay, gross_pay, hourly_wage, hours_worked
            FROM compensation_info
            WHERE eid = ?
            ORDER BY start_date, id
            "#,
        )
        .bind(eid)
        .fetch_all(self)
        .await
    }
}
