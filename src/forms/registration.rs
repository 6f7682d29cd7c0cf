use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{FieldErrorKind, FieldErrors, employee_id, not_blank, personal_info::EMAIL_IN_USE};
use super::personal_info::PersonalInfoForm;
use crate::{
    auth::password::hash_password, error::AppError, model::employee::NewEmployee,
    store::EmployeeStore,
};

pub const ID_IN_USE: &str = "Employee ID is already in use.";
pub const PASSWORDS_MUST_MATCH: &str = "Field must be equal to confirm_password.";

/// New account sign-up.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegistrationForm {
    #[validate(required, range(min = 1))]
    #[schema(example = 1001)]
    pub id: Option<i64>,

    #[serde(flatten)]
    #[validate(nested)]
    pub info: PersonalInfoForm,

    #[validate(required, custom(function = "not_blank"))]
    #[schema(format = "password")]
    pub password: Option<String>,

    #[schema(format = "password")]
    pub confirm_password: Option<String>,
}

impl RegistrationForm {
    /// Field rules, including the password confirmation.
    pub fn check_fields(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(e) => FieldErrors::from(e),
        };

        if let Some(password) = self.password.as_deref() {
            if self.confirm_password.as_deref() != Some(password) {
                errors.add("password", FieldErrorKind::Equality, PASSWORDS_MUST_MATCH);
            }
        }

        errors.into_result()
    }

    /// Runs every registration rule and returns the record to insert, with
    /// the password already hashed.
    pub async fn validate_with<S: EmployeeStore>(&self, store: &S) -> Result<NewEmployee, AppError> {
        self.check_fields()?;
        let id = employee_id(&self.id, "id")?;
        let info = self.info.to_info()?;

        let mut errors = FieldErrors::default();
        if store.email_in_use(&info.email, None).await? {
            errors.add("email", FieldErrorKind::Duplicate, EMAIL_IN_USE);
        }
        if store.employee_exists(id).await? {
            errors.add("id", FieldErrorKind::Duplicate, ID_IN_USE);
        }
        errors.into_result()?;

        let password = super::present(&self.password, "password")?;
        let password_hash =
            hash_password(password).map_err(|e| AppError::PasswordHash(e.to_string()))?;

        Ok(NewEmployee {
            id,
            info,
            password_hash,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::forms::personal_info::tests::valid_info;
    use crate::store::memory::InMemoryStore;

    pub(crate) fn valid_registration(id: i64, email: &str) -> RegistrationForm {
        RegistrationForm {
            id: Some(id),
            info: valid_info(email),
            password: Some("correct horse".into()),
            confirm_password: Some("correct horse".into()),
        }
    }

    #[test]
    fn deserializes_flat_json() {
        let form: RegistrationForm = serde_json::from_value(serde_json::json!({
            "id": 5,
            "email": "flat@company.com",
            "first_name": "Flat",
            "last_name": "Json",
            "dob": "1985-01-31",
            "street": "1 Elm",
            "city": "Austin",
            "state": "TX",
            "zip": 73301,
            "cell_phone": "512-555-0101",
            "password": "pw",
            "confirm_password": "pw"
        }))
        .unwrap();

        assert_eq!(form.id, Some(5));
        assert_eq!(form.info.state.as_deref(), Some("TX"));
        assert!(form.check_fields().is_ok());
    }

    #[test]
    fn password_mismatch_fails() {
        let mut form = valid_registration(1, "a@b.com");
        form.confirm_password = Some("different".into());
        let errors = form.check_fields().unwrap_err();
        assert!(errors.has("password", FieldErrorKind::Equality));

        form.confirm_password = None;
        let errors = form.check_fields().unwrap_err();
        assert!(errors.has("password", FieldErrorKind::Equality));
    }

    #[test]
    fn nested_field_errors_use_flat_names() {
        let mut form = valid_registration(1, "a@b.com");
        form.info.zip = Some(123);
        form.id = None;
        let errors = form.check_fields().unwrap_err();
        assert!(errors.has("zip", FieldErrorKind::Format));
        assert!(errors.has("id", FieldErrorKind::Required));
    }

    #[actix_web::test]
    async fn duplicate_email_fails() {
        let store = InMemoryStore::default();
        store.seed_employee(1, "taken@company.com");

        let err = valid_registration(2, "taken@company.com")
            .validate_with(&store)
            .await
            .unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.has("email", FieldErrorKind::Duplicate));
        assert!(errors.get("id").is_none());
    }

    #[actix_web::test]
    async fn duplicate_id_fails() {
        let store = InMemoryStore::default();
        store.seed_employee(9, "nine@company.com");

        let err = valid_registration(9, "fresh@company.com")
            .validate_with(&store)
            .await
            .unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.has("id", FieldErrorKind::Duplicate));
    }

    #[actix_web::test]
    async fn valid_registration_hashes_password() {
        let store = InMemoryStore::default();
        let new = valid_registration(3, "new@company.com")
            .validate_with(&store)
            .await
            .unwrap();

        assert_eq!(new.id, 3);
        assert_ne!(new.password_hash, "correct horse");
        assert!(crate::auth::password::verify_password("correct horse", &new.password_hash));
    }
}
