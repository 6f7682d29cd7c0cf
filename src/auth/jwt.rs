use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use uuid::Uuid;

use crate::{model::employee::Employee, models::Claims};

fn now() -> usize {
    Utc::now().timestamp().max(0) as usize
}

pub fn generate_access_token(employee: &Employee, secret: &str, ttl: usize) -> Result<String, Error> {
    let claims = Claims {
        sub: employee.email.clone(),
        employee_id: employee.id,
        is_admin: employee.is_admin,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn token_round_trips_claims() {
        let store = InMemoryStore::default();
        let admin = store.seed(10, "boss@company.com", "x", true);

        let token = generate_access_token(&admin, "secret", 60).unwrap();
        let claims = verify_token(&token, "secret").unwrap();

        assert_eq!(claims.employee_id, 10);
        assert_eq!(claims.sub, "boss@company.com");
        assert!(claims.is_admin);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let store = InMemoryStore::default();
        let employee = store.seed_employee(11, "e@company.com");
        let token = generate_access_token(&employee, "secret", 60).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }
}
