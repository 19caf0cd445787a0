//! Client-side rules for the tenant contact edit form.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::error::ErrorCode;

pub const NAME_MAX_CHARS: usize = 255;
pub const PHONE_MIN_CHARS: usize = 5;
pub const PHONE_MAX_CHARS: usize = 20;

/// Values submitted from the contact edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// One entry per failing field, in form order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", summary(.0))]
pub struct ValidationError(pub Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        "E_VALIDATION"
    }
}

fn check_name(field: &'static str, value: &str, required: &'static str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError { field, message: required });
    }
    (value.chars().count() > NAME_MAX_CHARS)
        .then_some(FieldError { field, message: "Must be shorter than 255 Characters" })
}

fn check_phone(value: &str) -> Option<FieldError> {
    let field = "phone";
    let len = value.chars().count();
    if len == 0 {
        return Some(FieldError { field, message: "*a valid phone number is required" });
    }
    if len < PHONE_MIN_CHARS {
        return Some(FieldError {
            field,
            message: "*Number must contain at least 5 digits to be a valid phone/text number",
        });
    }
    (len > PHONE_MAX_CHARS).then_some(FieldError { field, message: "*Numbers can't be longer than 20 digits" })
}

/// Check the form, reporting the first failing rule of each field.
///
/// # Errors
///
/// Returns every failing field when any rule is violated.
pub fn validate(form: &EditForm) -> Result<(), ValidationError> {
    let errors: Vec<FieldError> = [
        check_name("firstName", &form.first_name, "Must enter a First Name"),
        check_name("lastName", &form.last_name, "Must enter a Last Name"),
        check_phone(&form.phone),
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() { Ok(()) } else { Err(ValidationError(errors)) }
}
