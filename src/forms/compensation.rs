use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{EMPLOYEE_NOT_FOUND, FieldErrorKind, FieldErrors, employee_id, iso_date, parse_date, present};
use crate::{error::AppError, model::compensation::NewCompensation, store::EmployeeStore};

/// Pay for one employee over one pay period.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CompensationForm {
    #[validate(required, range(min = 1))]
    #[schema(example = 1001)]
    pub eid: Option<i64>,

    #[validate(required, custom(function = "iso_date"))]
    #[schema(example = "2026-01-01", format = "date")]
    pub start_date: Option<String>,

    #[validate(required, custom(function = "iso_date"))]
    #[schema(example = "2026-01-15", format = "date")]
    pub end_date: Option<String>,

    #[validate(required, range(min = 0.0))]
    #[schema(example = 1480.25)]
    pub net_pay: Option<f64>,

    #[validate(required, range(min = 0.0))]
    #[schema(example = 2000.0)]
    pub gross_pay: Option<f64>,

    #[validate(required, range(min = 0.0))]
    #[schema(example = 25.0)]
    pub hourly_wage: Option<f64>,

    #[validate(required, range(min = 0.0))]
    #[schema(example = 80.0)]
    pub hours_worked: Option<f64>,
}

fn date_field(value: &Option<String>, field: &str) -> Result<chrono::NaiveDate, FieldErrors> {
    parse_date(present(value, field)?)
        .ok_or_else(|| FieldErrors::single(field, FieldErrorKind::Format, "Not a valid date value."))
}

impl CompensationForm {
    pub fn check_fields(&self) -> Result<NewCompensation, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;

        let start_date = date_field(&self.start_date, "start_date")?;
        let end_date = date_field(&self.end_date, "end_date")?;
        if end_date < start_date {
            return Err(FieldErrors::single(
                "end_date",
                FieldErrorKind::Format,
                "End date must not be before start date.",
            ));
        }

        Ok(NewCompensation {
            eid: employee_id(&self.eid, "eid")?,
            start_date,
            end_date,
            net_pay: *present(&self.net_pay, "net_pay")?,
            gross_pay: *present(&self.gross_pay, "gross_pay")?,
            hourly_wage: *present(&self.hourly_wage, "hourly_wage")?,
            hours_worked: *present(&self.hours_worked, "hours_worked")?,
        })
    }

    /// Field rules, then the employee must exist.
    pub async fn validate_with<S: EmployeeStore>(
        &self,
        store: &S,
    ) -> Result<NewCompensation, AppError> {
        let compensation = self.check_fields()?;

        if !store.employee_exists(compensation.eid).await? {
            return Err(FieldErrors::single("eid", FieldErrorKind::NotFound, EMPLOYEE_NOT_FOUND).into());
        }

        Ok(compensation)
    }
}
