//! Submitted forms and the rules they must pass before anything is persisted.
//!
//! Every form is checked in two passes. Field rules (presence, length, range,
//! choice, email and date format, cross-field equality) run first and need no
//! database. Only when all fields pass are the record-level checks run
//! against the [`EmployeeStore`](crate::store::EmployeeStore).

pub mod compensation;
pub mod payroll;
pub mod personal_info;
pub mod registration;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::debug;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::model::us_state::UsState;

pub const REQUIRED: &str = "This field is required.";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee ID not found.";
/// Key for errors that belong to the request body rather than one field.
pub const BODY: &str = "body";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Missing or blank.
    Required,
    /// Length, range, email, date or choice violation.
    Format,
    /// Field must equal another field.
    Equality,
    /// Value already taken by a persisted record.
    Duplicate,
    /// Referenced record does not exist.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Validation failures keyed by field name.
///
/// A field that is required and missing reports only that; further rule
/// violations on the same field are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldError>>);

impl FieldErrors {
    pub fn single(field: &str, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, kind, message);
        errors
    }

    pub fn add(&mut self, field: &str, kind: FieldErrorKind, message: impl Into<String>) {
        let entry = self.0.entry(field.to_string()).or_default();
        if entry.iter().any(|e| e.kind == FieldErrorKind::Required) {
            return;
        }
        if kind == FieldErrorKind::Required {
            entry.clear();
        }
        entry.push(FieldError {
            kind,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// True if `field` carries an error of the given kind.
    pub fn has(&self, field: &str, kind: FieldErrorKind) -> bool {
        self.get(field)
            .is_some_and(|errors| errors.iter().any(|e| e.kind == kind))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn absorb(&mut self, errors: &ValidationErrors) {
        for (field, kind) in errors.errors() {
            match kind {
                ValidationErrorsKind::Field(list) => {
                    for err in list {
                        self.add(&field.to_string(), kind_for(&err.code), message_for(err));
                    }
                }
                // Nested forms are flattened into the parent's field names.
                ValidationErrorsKind::Struct(inner) => self.absorb(inner),
                ValidationErrorsKind::List(items) => {
                    for inner in items.values() {
                        self.absorb(inner);
                    }
                }
            }
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        out.absorb(&errors);
        out
    }
}

/// Reads a submitted JSON body into a form.
///
/// Every form field is optional at this stage, so a single field can be
/// deserialized on its own. That pins a value of the wrong type to its field
/// as a Format error instead of rejecting the whole body.
pub fn from_json<T: DeserializeOwned>(body: Value) -> Result<T, FieldErrors> {
    let err = match <T as Deserialize>::deserialize(&body) {
        Ok(form) => return Ok(form),
        Err(err) => err,
    };

    let Value::Object(fields) = &body else {
        return Err(FieldErrors::single(
            BODY,
            FieldErrorKind::Format,
            "Request body must be a JSON object.",
        ));
    };

    let mut errors = FieldErrors::default();
    for (name, value) in fields {
        let alone = Value::Object(Map::from_iter([(name.clone(), value.clone())]));
        if let Err(field_err) = <T as Deserialize>::deserialize(&alone) {
            errors.add(name, FieldErrorKind::Format, type_message(&field_err));
        }
    }
    if errors.is_empty() {
        debug!(error = %err, "Form body rejected");
        errors.add(BODY, FieldErrorKind::Format, "Invalid request body.");
    }
    Err(errors)
}

fn type_message(err: &serde_json::Error) -> &'static str {
    let text = err.to_string();
    if text.contains("expected i64") || text.contains("expected u64") {
        "Not a valid integer value."
    } else if text.contains("expected f64") {
        "Not a valid float value."
    } else {
        "Not a valid value."
    }
}

fn kind_for(code: &str) -> FieldErrorKind {
    match code {
        "required" => FieldErrorKind::Required,
        _ => FieldErrorKind::Format,
    }
}

fn message_for(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    let param = |name: &str| err.params.get(name).map(render_param);

    match err.code.as_ref() {
        "required" => REQUIRED.to_string(),
        "email" => "Invalid email address.".to_string(),
        "length" => match (param("equal"), param("min"), param("max")) {
            (Some(n), _, _) => format!("Field must be exactly {n} characters long."),
            (None, Some(min), Some(max)) => {
                format!("Field must be between {min} and {max} characters long.")
            }
            (None, None, Some(max)) => format!("Field cannot be longer than {max} characters."),
            (None, Some(min), None) => format!("Field must be at least {min} characters long."),
            (None, None, None) => "Invalid field length.".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("Number must be between {min} and {max}."),
            (Some(min), None) => format!("Number must be at least {min}."),
            (None, Some(max)) => format!("Number must be at most {max}."),
            (None, None) => "Number is out of range.".to_string(),
        },
        other => format!("Invalid value ({other})."),
    }
}

fn render_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Rejects strings that are empty or whitespace only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", REQUIRED));
    }
    Ok(())
}

pub(crate) fn iso_date(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(failure("date", "Not a valid date value.")),
    }
}

pub(crate) fn us_state(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    UsState::from_str(value)
        .map(|_| ())
        .map_err(|_| failure("choice", "Not a valid US state abbreviation."))
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Reads a field the derive rules have already marked required.
pub(crate) fn present<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T, FieldErrors> {
    value
        .as_ref()
        .ok_or_else(|| FieldErrors::single(field, FieldErrorKind::Required, REQUIRED))
}

/// Optional text: absent or blank becomes `None`.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Positive identifier from a validated signed field.
pub(crate) fn employee_id(value: &Option<i64>, field: &str) -> Result<u64, FieldErrors> {
    let raw = *present(value, field)?;
    u64::try_from(raw).map_err(|_| {
        FieldErrors::single(field, FieldErrorKind::Format, "Number must be at least 1.")
    })
}
