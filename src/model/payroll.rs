use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, AsRefStr, Display, EnumString)]
pub enum AccountType {
    Checking,
    Savings,
}

/// Withholding and direct-deposit details for one employee.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Payroll {
    pub id: u64,
    #[schema(example = 1001)]
    pub eid: u64,
    #[schema(example = "Checking")]
    pub account_type: String,
    #[schema(example = "123456789")]
    pub account_num: String,
    #[schema(example = "021000021")]
    pub routing_num: String,
    pub amount_withheld: i64,
    pub num_allowances: i64,
    pub claim_exemption: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayroll {
    pub eid: u64,
    pub account_type: AccountType,
    pub account_num: String,
    pub routing_num: String,
    pub amount_withheld: i64,
    pub num_allowances: i64,
    pub claim_exemption: bool,
}
