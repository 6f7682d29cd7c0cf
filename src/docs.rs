use crate::forms::{
    FieldError, FieldErrorKind, compensation::CompensationForm, payroll::FlagInput,
    payroll::PayrollForm, personal_info::PersonalInfoForm, registration::RegistrationForm,
};
use crate::model::{
    compensation::Compensation, employee::Employee, payroll::AccountType, payroll::Payroll,
    us_state::UsState,
};
use crate::models::{LoginReqDto, LoginResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Portal API",
        version = "1.0.0",
        description = r#"
## Employee Payroll Portal

Employees register their own accounts. Administrators maintain:
- **Personal info**: name, date of birth, address, phone numbers
- **Payroll info**: deposit account and withholding, one record per employee
- **Compensation**: pay received per pay period, kept as a history

### Validation
Submissions are checked field by field first, then against stored records
(duplicate email, unknown employee ID, payroll already entered). A failed
submission returns `400` with errors keyed by field name and is not saved.

### Security
Everything under `/api` requires an administrator's bearer token from `/auth/login`.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,

        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::get_employee_payroll,
        crate::api::employee::list_employee_compensation,

        crate::api::payroll::create_payroll,
        crate::api::compensation::create_compensation
    ),
    components(
        schemas(
            RegistrationForm,
            PersonalInfoForm,
            PayrollForm,
            FlagInput,
            CompensationForm,
            FieldError,
            FieldErrorKind,
            Employee,
            Payroll,
            AccountType,
            Compensation,
            UsState,
            LoginReqDto,
            LoginResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Employee", description = "Employee personal info"),
        (name = "Payroll", description = "Payroll and withholding info"),
        (name = "Compensation", description = "Pay period records"),
    )
)]
pub struct ApiDoc;

/// Prefix the admin paths are documented under.
const DOC_PREFIX: &str = "/api";

/// The OpenAPI document with admin paths moved under the configured prefix.
pub fn api_doc(api_prefix: &str) -> openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if api_prefix != DOC_PREFIX {
        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(path, item)| match path.strip_prefix(DOC_PREFIX) {
                Some(rest) if rest.starts_with('/') => (format!("{api_prefix}{rest}"), item),
                _ => (path, item),
            })
            .collect();
    }
    doc
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
