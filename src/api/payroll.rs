use actix_web::{HttpResponse, web};
use sqlx::MySqlPool;

use crate::{
    auth::auth::AuthUser,
    error::AppError,
    forms::{from_json, payroll::PayrollForm},
    model::payroll::Payroll,
    services,
};

#[utoipa::path(
    post,
    path = "/api/payroll",
    request_body = PayrollForm,
    responses(
        (status = 201, description = "Payroll info entered", body = Payroll),
        (status = 400, description = "Validation failed, unknown employee, or payroll already entered", body = Object, example = json!({
            "message": "Validation failed",
            "errors": { "eid": [{ "kind": "duplicate", "message": "Payroll info has already been entered for this employee." }] }
        })),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Payroll"
)]
pub async fn create_payroll(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let form: PayrollForm = from_json(payload.into_inner())?;
    let payroll = services::submit_payroll(pool.get_ref(), &form).await?;

    Ok(HttpResponse::Created().json(payroll))
}
