use actix_web::{HttpResponse, web};
use sqlx::MySqlPool;

use crate::{
    auth::auth::AuthUser,
    error::AppError,
    forms::{compensation::CompensationForm, from_json},
    model::compensation::Compensation,
    services,
};

#[utoipa::path(
    post,
    path = "/api/compensation",
    request_body = CompensationForm,
    responses(
        (status = 201, description = "Compensation recorded", body = Compensation),
        (status = 400, description = "Validation failed or unknown employee"),
        (status = 401),
        (status = 403)
    ),
    security(("bearer_auth" = [])),
    tag = "Compensation"
)]
pub async fn create_compensation(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let form: CompensationForm = from_json(payload.into_inner())?;
    let compensation = services::submit_compensation(pool.get_ref(), &form).await?;

    Ok(HttpResponse::Created().json(compensation))
}
