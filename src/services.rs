//! Validate-then-persist flows behind each handler.
//!
//! Nothing is written unless every rule for the submission passes.

use tracing::{info, warn};

use crate::{
    error::AppError,
    forms::{
        FieldErrorKind, FieldErrors,
        compensation::CompensationForm,
        payroll::PayrollForm,
        personal_info::{EMAIL_IN_USE, PersonalInfoForm},
        registration::{ID_IN_USE, RegistrationForm},
    },
    model::{compensation::Compensation, employee::Employee, payroll::Payroll},
    store::{EmployeeStore, unique_violation},
};

const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Unique key on `employee.email`, as named in the schema migration.
const EMAIL_KEY: &str = "uq_employee_email";

pub async fn register<S: EmployeeStore>(
    store: &S,
    form: &RegistrationForm,
) -> Result<Employee, AppError> {
    let new = form.validate_with(store).await?;

    match store.insert_employee(&new).await {
        Ok(employee) => {
            info!(employee_id = employee.id, "Employee registered");
            Ok(employee)
        }
        Err(e) => Err(duplicate_on_insert(e)),
    }
}

pub async fn update_personal_info<S: EmployeeStore>(
    store: &S,
    id: u64,
    form: &PersonalInfoForm,
) -> Result<Employee, AppError> {
    let info = form.validate_for(id, store).await?;

    match store.update_personal_info(id, &info).await {
        Ok(0) => return Err(AppError::NotFound(EMPLOYEE_NOT_FOUND.into())),
        Ok(_) => {}
        Err(e) => return Err(duplicate_on_insert(e)),
    }
    info!(employee_id = id, "Employee personal info updated");

    employee_profile(store, id).await
}

pub async fn submit_payroll<S: EmployeeStore>(
    store: &S,
    form: &PayrollForm,
) -> Result<Payroll, AppError> {
    let new = form.validate_with(store).await?;
    let payroll = store.insert_payroll(&new).await?;
    info!(employee_id = payroll.eid, payroll_id = payroll.id, "Payroll info entered");
    Ok(payroll)
}

pub async fn submit_compensation<S: EmployeeStore>(
    store: &S,
    form: &CompensationForm,
) -> Result<Compensation, AppError> {
    let new = form.validate_with(store).await?;
    let compensation = store.insert_compensation(&new).await?;
    info!(
        employee_id = compensation.eid,
        compensation_id = compensation.id,
        "Compensation recorded"
    );
    Ok(compensation)
}

pub async fn employee_profile<S: EmployeeStore>(store: &S, id: u64) -> Result<Employee, AppError> {
    store
        .find_employee(id)
        .await?
        .ok_or_else(|| AppError::NotFound(EMPLOYEE_NOT_FOUND.into()))
}

pub async fn payroll_for<S: EmployeeStore>(store: &S, eid: u64) -> Result<Payroll, AppError> {
    store
        .find_payroll(eid)
        .await?
        .ok_or_else(|| AppError::NotFound("Payroll info not found".into()))
}

pub async fn compensation_history<S: EmployeeStore>(
    store: &S,
    eid: u64,
) -> Result<Vec<Compensation>, AppError> {
    if !store.employee_exists(eid).await? {
        return Err(AppError::NotFound(EMPLOYEE_NOT_FOUND.into()));
    }
    Ok(store.list_compensations(eid).await?)
}

/// Checks login credentials. Unknown email and wrong password look the same
/// to the caller.
pub async fn authenticate<S: EmployeeStore>(
    store: &S,
    email: &str,
    password: &str,
) -> Result<Employee, AppError> {
    let invalid = || AppError::Unauthorized("Invalid credentials".into());

    let employee = store.find_employee_by_email(email.trim()).await?.ok_or_else(|| {
        info!("Invalid credentials: email not found");
        invalid()
    })?;

    if !employee.verify_password(password) {
        info!(employee_id = employee.id, "Invalid credentials: password mismatch");
        return Err(invalid());
    }

    Ok(employee)
}

/// A concurrent submission can slip past the pre-checks and hit the unique
/// key instead; report it the way the pre-check would have.
fn duplicate_on_insert(err: sqlx::Error) -> AppError {
    let Some(message) = unique_violation(&err) else {
        return AppError::Database(err);
    };
    warn!(error = %message, "Unique key violation on write");

    let errors = if message.contains(EMAIL_KEY) {
        FieldErrors::single("email", FieldErrorKind::Duplicate, EMAIL_IN_USE)
    } else {
        FieldErrors::single("id", FieldErrorKind::Duplicate, ID_IN_USE)
    };
    AppError::Validation(errors)
}
