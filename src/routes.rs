use crate::{
    api::{compensation, employee, payroll},
    auth::handlers,
    error::AppError,
    forms::{BODY, FieldErrorKind, FieldErrors},
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

pub type Limiter = Arc<Governor<PeerIpKeyExtractor, NoOpMiddleware>>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Result<Limiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = 60_000 / requests_per_min as u64;

    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limiter settings")?;
    Ok(Arc::new(Governor::new(&cfg)))
}

/// Unreadable JSON bodies are reported like any other field error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "Request body rejected");
        AppError::from(FieldErrors::single(
            BODY,
            FieldErrorKind::Format,
            "Request body must be valid JSON.",
        ))
        .into()
    })
}

pub fn configure(
    cfg: &mut web::ServiceConfig,
    api_prefix: &str,
    auth_limiter: Limiter,
    protected_limiter: Limiter,
) {
    // Public routes
    cfg.service(
        web::scope("/auth")
            .wrap(auth_limiter)
            .service(web::resource("/register").route(web::post().to(handlers::register)))
            .service(web::resource("/login").route(web::post().to(handlers::login))),
    );

    // Admin routes; each handler checks the bearer token itself
    cfg.service(
        web::scope(api_prefix)
            .wrap(protected_limiter)
            .service(
                web::scope("/employees")
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee)),
                    )
                    // /employees/{id}/payroll
                    .service(
                        web::resource("/{id}/payroll")
                            .route(web::get().to(employee::get_employee_payroll)),
                    )
                    // /employees/{id}/compensation
                    .service(
                        web::resource("/{id}/compensation")
                            .route(web::get().to(employee::list_employee_compensation)),
                    ),
            )
            .service(web::resource("/payroll").route(web::post().to(payroll::create_payroll)))
            .service(
                web::resource("/compensation")
                    .route(web::post().to(compensation::create_compensation)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_accepts_zero_and_large_rates() {
        assert!(build_limiter(0).is_ok());
        assert!(build_limiter(30).is_ok());
        assert!(build_limiter(120_000).is_ok());
    }
}
