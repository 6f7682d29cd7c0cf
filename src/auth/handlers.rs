use crate::{
    auth::jwt::generate_access_token,
    config::Config,
    error::AppError,
    forms::{from_json, registration::RegistrationForm},
    model::employee::Employee,
    models::{LoginReqDto, LoginResponse},
    services,
};
use actix_web::{HttpResponse, web};
use sqlx::MySqlPool;
use tracing::{debug, info, instrument};

/// Register a new employee account
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegistrationForm,
    responses(
        (status = 201, description = "Employee registered", body = Employee),
        (status = 400, description = "One or more fields failed validation", body = Object, example = json!({
            "message": "Validation failed",
            "errors": { "email": [{ "kind": "duplicate", "message": "Email is already in use." }] }
        }))
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_register", skip(pool, payload), fields(employee_id = ?payload.get("id")))]
pub async fn register(
    payload: web::Json<serde_json::Value>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, AppError> {
    info!("Registration request received");

    let form: RegistrationForm = from_json(payload.into_inner())?;
    let employee = services::register(pool.get_ref(), &form).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Access token issued", body = LoginResponse),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(pool, config, user), fields(email = %user.email))]
pub async fn login(
    user: web::Json<LoginReqDto>,
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    info!("Login request received");

    if user.email.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty email or password");
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Email and password are required"
        })));
    }

    let employee = services::authenticate(pool.get_ref(), &user.email, &user.password).await?;
    debug!(employee_id = employee.id, "Password verified");

    let access_token =
        generate_access_token(&employee, &config.jwt_secret, config.access_token_ttl)?;

    info!(employee_id = employee.id, "Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: config.access_token_ttl,
    }))
}
