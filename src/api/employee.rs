use crate::{
    auth::auth::AuthUser,
    error::AppError,
    forms::{from_json, personal_info::PersonalInfoForm},
    model::{compensation::Compensation, employee::Employee, payroll::Payroll},
    services,
};
use actix_web::{HttpResponse, web};
use sqlx::MySqlPool;
use tracing::debug;

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employee(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let employee = services::employee_profile(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Edit an employee's personal info
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = PersonalInfoForm,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "One or more fields failed validation"),
        (status = 404, description = "Employee ID not found")
    ),
    tag = "Employee",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_employee(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let employee_id = path.into_inner();
    debug!(employee_id, admin_id = auth.employee_id, admin = %auth.email, "Updating personal info");

    let form: PersonalInfoForm = from_json(payload.into_inner())?;
    let employee = services::update_personal_info(pool.get_ref(), employee_id, &form).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Get an employee's payroll info
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/payroll",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, body = Payroll),
        (status = 404, description = "Payroll info not found")
    ),
    tag = "Payroll",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employee_payroll(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let payroll = services::payroll_for(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payroll))
}

/// List an employee's compensation history
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/compensation",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Pay periods, oldest first", body = [Compensation]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Compensation",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_employee_compensation(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let history = services::compensation_history(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(history))
}
