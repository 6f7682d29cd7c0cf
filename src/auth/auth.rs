use crate::{auth::jwt::verify_token, config::Config, error::AppError};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

pub struct AuthUser {
    pub employee_id: u64,
    pub email: String,
    pub is_admin: bool,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing token".into()))?;

    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| AppError::Internal("Config missing".into()))?;

    let claims = verify_token(token, &config.jwt_secret)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    Ok(AuthUser {
        employee_id: claims.employee_id,
        email: claims.sub,
        is_admin: claims.is_admin,
    })
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin only".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::jwt::generate_access_token, store::memory::InMemoryStore};
    use actix_web::test::TestRequest;

    fn config() -> Config {
        Config::from_lookup(|key: &str| match key {
            "SERVER_ADDR" => Some("127.0.0.1:0".into()),
            "DATABASE_URL" => Some("mysql://unused".into()),
            "JWT_SECRET" => Some("test-secret".into()),
            _ => None,
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn admin_token_passes_require_admin() {
        let store = InMemoryStore::default();
        let admin = store.seed(1, "admin@company.com", "x", true);
        let token = generate_access_token(&admin, "test-secret", 60).unwrap();

        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {token}")))
            .app_data(Data::new(config()))
            .to_http_request();
        let user = AuthUser::extract(&req).await.unwrap();

        assert_eq!(user.employee_id, 1);
        assert!(user.require_admin().is_ok());
    }

    #[actix_web::test]
    async fn non_admin_is_forbidden() {
        let store = InMemoryStore::default();
        let employee = store.seed_employee(2, "staff@company.com");
        let token = generate_access_token(&employee, "test-secret", 60).unwrap();

        let req = TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {token}")))
            .app_data(Data::new(config()))
            .to_http_request();
        let user = AuthUser::extract(&req).await.unwrap();

        assert!(matches!(user.require_admin(), Err(AppError::Forbidden(_))));
    }

    #[actix_web::test]
    async fn missing_or_forged_token_is_unauthorized() {
        let req = TestRequest::default()
            .app_data(Data::new(config()))
            .to_http_request();
        assert!(matches!(AuthUser::extract(&req).await, Err(AppError::Unauthorized(_))));

        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .app_data(Data::new(config()))
            .to_http_request();
        assert!(matches!(AuthUser::extract(&req).await, Err(AppError::Unauthorized(_))));
    }
}
