use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Form Types
// ============================================================================

/// The payload handed to the submit collaborator once both fields pass.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

impl LoginValues {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

impl fmt::Debug for LoginValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginValues")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Constants of the login schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_password_len: usize,
}

impl ValidationRules {
    pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_password_len: Self::DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
}

/// Per-field validation failures from a single pass. Iterates in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_serializes_as_snake_case_name() {
        assert_eq!(serde_json::to_string(&Field::Email).unwrap(), "\"email\"");
        assert_eq!(
            serde_json::to_string(&Field::Password).unwrap(),
            "\"password\""
        );
        for field in [Field::Email, Field::Password] {
            assert_eq!(field.to_string(), field.name());
        }
    }

    #[test]
    fn login_values_wire_shape() {
        let values = LoginValues::new("user@example.com", "abcdef");
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "user@example.com", "password": "abcdef" })
        );
    }

    #[test]
    fn login_values_debug_hides_password() {
        let values = LoginValues::new("user@example.com", "hunter22");
        let debug = format!("{:?}", values);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn field_error_messages() {
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email."
        );
        assert_eq!(
            FieldError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters."
        );
    }

    #[test]
    fn field_errors_display_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Password, FieldError::PasswordTooShort { min: 6 });
        errors.insert(Field::Email, FieldError::InvalidEmail);

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.iter().map(|(field, _)| field).collect::<Vec<_>>(),
            vec![Field::Email, Field::Password]
        );
        assert_eq!(
            errors.to_string(),
            "email: Please enter a valid email.; password: Password must be at least 6 characters."
        );
    }
}
