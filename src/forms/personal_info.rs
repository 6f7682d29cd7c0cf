use std::str::FromStr;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    EMPLOYEE_NOT_FOUND, FieldErrorKind, FieldErrors, iso_date, not_blank, optional_text,
    parse_date, present, us_state,
};
use crate::{
    error::AppError, model::employee::PersonalInfo, model::us_state::UsState,
    store::EmployeeStore,
};

pub const EMAIL_IN_USE: &str = "Email is already in use.";

/// Identity, address and contact fields of an employee.
///
/// Used on its own when an admin edits an existing employee, and flattened
/// into [`RegistrationForm`](super::registration::RegistrationForm).
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PersonalInfoForm {
    #[validate(required, custom(function = "not_blank"), email)]
    #[schema(example = "jane.doe@company.com")]
    pub email: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(min = 1, max = 60))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 60))]
    pub middle_name: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(min = 1, max = 60))]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,

    #[validate(required, custom(function = "iso_date"))]
    #[schema(example = "1990-04-12", format = "date")]
    pub dob: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(max = 60))]
    #[schema(example = "12 Main St")]
    pub street: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(max = 60))]
    #[schema(example = "Springfield")]
    pub city: Option<String>,

    #[validate(required, custom(function = "us_state"))]
    #[schema(example = "IL")]
    pub state: Option<String>,

    #[validate(required, range(min = 1000, max = 99999))]
    #[schema(example = 62701)]
    pub zip: Option<i64>,

    #[validate(length(max = 15))]
    pub home_phone: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(max = 15))]
    #[schema(example = "217-555-0100")]
    pub cell_phone: Option<String>,
}

impl PersonalInfoForm {
    /// Field rules only; no store access.
    pub fn check_fields(&self) -> Result<PersonalInfo, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;
        self.to_info()
    }

    /// Full check for editing employee `id`: field rules, then the employee
    /// must exist and the email must not belong to anyone else.
    pub async fn validate_for<S: EmployeeStore>(
        &self,
        id: u64,
        store: &S,
    ) -> Result<PersonalInfo, AppError> {
        let info = self.check_fields()?;

        if !store.employee_exists(id).await? {
            return Err(AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string()));
        }
        if store.email_in_use(&info.email, Some(id)).await? {
            return Err(FieldErrors::single("email", FieldErrorKind::Duplicate, EMAIL_IN_USE).into());
        }

        Ok(info)
    }

    pub(crate) fn to_info(&self) -> Result<PersonalInfo, FieldErrors> {
        let dob = present(&self.dob, "dob")?;
        let dob = parse_date(dob).ok_or_else(|| {
            FieldErrors::single("dob", FieldErrorKind::Format, "Not a valid date value.")
        })?;
        let state = UsState::from_str(present(&self.state, "state")?).map_err(|_| {
            FieldErrors::single("state", FieldErrorKind::Format, "Not a valid US state abbreviation.")
        })?;

        Ok(PersonalInfo {
            email: present(&self.email, "email")?.trim().to_string(),
            first_name: present(&self.first_name, "first_name")?.clone(),
            middle_name: optional_text(&self.middle_name),
            last_name: present(&self.last_name, "last_name")?.clone(),
            dob,
            street: present(&self.street, "street")?.clone(),
            city: present(&self.city, "city")?.clone(),
            state,
            zip: *present(&self.zip, "zip")?,
            home_phone: optional_text(&self.home_phone),
            cell_phone: present(&self.cell_phone, "cell_phone")?.clone(),
        })
    }
}
