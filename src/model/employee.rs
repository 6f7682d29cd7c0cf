use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::password;
use crate::model::us_state::UsState;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1001,
        "first_name": "Jane",
        "middle_name": null,
        "last_name": "Doe",
        "dob": "1990-04-12",
        "email": "jane.doe@company.com",
        "street": "12 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip": 62701,
        "home_phone": null,
        "cell_phone": "217-555-0100",
        "is_admin": false
    })
)]
pub struct Employee {
    #[schema(example = 1001)]
    pub id: u64,

    pub first_name: String,

    #[schema(nullable = true)]
    pub middle_name: Option<String>,

    pub last_name: String,

    #[schema(value_type = String, format = "date")]
    pub dob: NaiveDate,

    #[schema(format = "email")]
    pub email: String,

    pub street: String,
    pub city: String,

    #[schema(example = "IL")]
    pub state: String,

    #[schema(example = 62701)]
    pub zip: i64,

    #[schema(nullable = true)]
    pub home_phone: Option<String>,
    pub cell_phone: String,

    /// Argon2 PHC string. Never serialized.
    #[serde(skip)]
    pub password_hash: String,

    pub is_admin: bool,
}

impl Employee {
    /// Check a candidate password against the stored hash.
    pub fn verify_password(&self, candidate: &str) -> bool {
        password::verify_password(candidate, &self.password_hash)
    }
}

/// Personal details shared by registration and the admin edit form,
/// after field validation has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub dob: NaiveDate,
    pub street: String,
    pub city: String,
    pub state: UsState,
    pub zip: i64,
    pub home_phone: Option<String>,
    pub cell_phone: String,
}

/// A validated registration, ready to insert.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub id: u64,
    pub info: PersonalInfo,
    pub password_hash: String,
}

impl NewEmployee {
    pub fn into_employee(self) -> Employee {
        let info = self.info;
        Employee {
            id: self.id,
            first_name: info.first_name,
            middle_name: info.middle_name,
            last_name: info.last_name,
            dob: info.dob,
            email: info.email,
            street: info.street,
            city: info.city,
            state: info.state.to_string(),
            zip: info.zip,
            home_phone: info.home_phone,
            cell_phone: info.cell_phone,
            password_hash: self.password_hash,
            is_admin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;

    fn sample_info(email: &str) -> PersonalInfo {
        PersonalInfo {
            email: email.to_string(),
            first_name: "Jane".into(),
            middle_name: None,
            last_name: "Doe".into(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            street: "12 Main St".into(),
            city: "Springfield".into(),
            state: UsState::Illinois,
            zip: 62701,
            home_phone: None,
            cell_phone: "217-555-0100".into(),
        }
    }

    #[test]
    fn serialized_employee_has_no_password_material() {
        let employee = NewEmployee {
            id: 7,
            info: sample_info("jane@company.com"),
            password_hash: hash_password("hunter22").unwrap(),
        }
        .into_employee();

        let json = serde_json::to_value(&employee).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("hunter22"));
        assert_eq!(json["state"], "IL");
        assert_eq!(json["is_admin"], false);
    }

    #[test]
    fn verify_password_uses_stored_hash() {
        let employee = NewEmployee {
            id: 7,
            info: sample_info("jane@company.com"),
            password_hash: hash_password("hunter22").unwrap(),
        }
        .into_employee();

        assert!(employee.verify_password("hunter22"));
        assert!(!employee.verify_password("hunter23"));
        assert_ne!(employee.password_hash, "hunter22");
    }
}
