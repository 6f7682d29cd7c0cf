use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{EMPLOYEE_NOT_FOUND, FieldErrorKind, FieldErrors, employee_id, not_blank, present};
use crate::{
    error::AppError,
    model::payroll::{AccountType, NewPayroll},
    store::EmployeeStore,
};

pub const PAYROLL_ALREADY_ENTERED: &str =
    "Payroll info has already been entered for this employee.";

/// The exemption flag as submitted: a JSON boolean or one of the words
/// `True`, `False`, `Yes`, `No`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FlagInput {
    Bool(bool),
    Text(String),
}

impl FlagInput {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagInput::Bool(b) => Some(*b),
            FlagInput::Text(s) => match s.as_str() {
                "True" | "Yes" => Some(true),
                "False" | "No" => Some(false),
                _ => None,
            },
        }
    }
}

fn exemption_flag(value: &FlagInput) -> Result<(), ValidationError> {
    match value.as_bool() {
        Some(_) => Ok(()),
        None => {
            let mut err = ValidationError::new("choice");
            err.message = Some(Cow::Borrowed(
                "Invalid value, must be one of: True, False, Yes, No.",
            ));
            Err(err)
        }
    }
}

fn account_type(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    AccountType::from_str(value).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("choice");
        err.message = Some(Cow::Borrowed("Invalid value, must be one of: Checking, Savings."));
        err
    })
}

/// Banking and withholding details for an existing employee.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PayrollForm {
    #[validate(required, range(min = 1))]
    #[schema(example = 1001)]
    pub eid: Option<i64>,

    #[validate(required, custom(function = "self::account_type"))]
    #[schema(example = "Checking")]
    pub account_type: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(equal = 9))]
    #[schema(example = "123456789")]
    pub account_num: Option<String>,

    #[validate(required, custom(function = "not_blank"), length(equal = 9))]
    #[schema(example = "021000021")]
    pub routing_num: Option<String>,

    #[validate(required, range(min = 0))]
    #[schema(example = 150)]
    pub amount_withheld: Option<i64>,

    #[validate(required, range(min = 0))]
    #[schema(example = 2)]
    pub num_allowances: Option<i64>,

    #[validate(required, custom(function = "exemption_flag"))]
    #[schema(example = false)]
    pub claim_exemption: Option<FlagInput>,
}

impl PayrollForm {
    pub fn check_fields(&self) -> Result<NewPayroll, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;

        let account_type =
            AccountType::from_str(present(&self.account_type, "account_type")?).map_err(|_| {
                FieldErrors::single("account_type", FieldErrorKind::Format, "Invalid value.")
            })?;
        let claim_exemption = present(&self.claim_exemption, "claim_exemption")?
            .as_bool()
            .ok_or_else(|| {
                FieldErrors::single("claim_exemption", FieldErrorKind::Format, "Invalid value.")
            })?;

        Ok(NewPayroll {
            eid: employee_id(&self.eid, "eid")?,
            account_type,
            account_num: present(&self.account_num, "account_num")?.clone(),
            routing_num: present(&self.routing_num, "routing_num")?.clone(),
            amount_withheld: *present(&self.amount_withheld, "amount_withheld")?,
            num_allowances: *present(&self.num_allowances, "num_allowances")?,
            claim_exemption,
        })
    }

    /// Field rules, then the employee must exist and have no payroll yet.
    pub async fn validate_with<S: EmployeeStore>(&self, store: &S) -> Result<NewPayroll, AppError> {
        let payroll = self.check_fields()?;

        if !store.employee_exists(payroll.eid).await? {
            return Err(FieldErrors::single("eid", FieldErrorKind::NotFound, EMPLOYEE_NOT_FOUND).into());
        }
        if store.payroll_exists(payroll.eid).await? {
            return Err(
                FieldErrors::single("eid", FieldErrorKind::Duplicate, PAYROLL_ALREADY_ENTERED).into(),
            );
        }

        Ok(payroll)
    }
}
