use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// Pay received by an employee over one pay period.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Compensation {
    pub id: u64,
    pub eid: u64,
    #[schema(value_type = String, format = "date", example = "2026-01-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = "date", example = "2026-01-15")]
    pub end_date: NaiveDate,
    pub net_pay: f64,
    pub gross_pay: f64,
    pub hourly_wage: f64,
    pub hours_worked: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCompensation {
    pub eid: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub net_pay: f64,
    pub gross_pay: f64,
    pub hourly_wage: f64,
    pub hours_worked: f64,
}
