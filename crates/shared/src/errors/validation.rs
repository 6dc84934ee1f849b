use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable reason attached to a single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FieldErrorCode {
    EmptyField,
    DuplicateName,
    NonPositiveValue,
    NegativeValue,
    DuplicateEmail,
    DuplicateUsername,
    PasswordMismatch,
}

/// One violated field. A failed submission carries the complete set of
/// these, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub code: FieldErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code,
            message: message.into(),
        }
    }
}
