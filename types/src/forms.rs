//! Form values for the authentication screens and their validation schemas.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignInValues {
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignUpValues {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    pub last_name: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password should be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirmation: String,
    #[validate(custom(function = "accepted"))]
    pub terms: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResetPasswordValues {
    #[validate(custom(function = "email_address"))]
    pub email: String,
}

/// Either a reset token from an emailed link, or the account's email and
/// current password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewPasswordValues {
    pub token: Option<String>,
    pub email: String,
    pub old_password: String,
    #[validate(length(min = 6, message = "Password should be at least 6 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirmation: String,
}

fn message(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Surrounding whitespace is ignored, lookups trim it too.
fn email_address(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(message("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(message("email", "Invalid email address"));
    }
    Ok(())
}

fn accepted(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(message("accepted", "You must accept the terms and conditions"))
    }
}

/// Per-field validation messages plus one root message from the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
    root: Option<String>,
}

impl FormErrors {
    pub fn root_error(message: impl Into<String>) -> Self {
        Self {
            root: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Keeps the first message reported for a field.
    pub fn insert(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(name.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.root.is_none()
    }

    /// The root message, or else the first field message.
    pub fn first(&self) -> Option<&str> {
        self.root().or_else(|| self.fields.values().next().map(String::as_str))
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form = Self::default();
        for (field, errors) in errors.field_errors() {
            if let Some(error) = errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));
                form.insert(field.to_string(), message);
            }
        }
        form
    }
}

/// A form that can be checked before submission.
pub trait Form: Validate {
    fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(FormErrors::from)
    }
}

impl Form for SignInValues {}
impl Form for SignUpValues {}
impl Form for ResetPasswordValues {}

impl Form for NewPasswordValues {
    fn check(&self) -> Result<(), FormErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(errors) => errors.into(),
        };

        if self.token.is_none() {
            if let Err(error) = email_address(&self.email) {
                if let Some(message) = error.message {
                    errors.insert("email", message);
                }
            }
            if self.old_password.is_empty() {
                errors.insert("old_password", "Current password is required");
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
