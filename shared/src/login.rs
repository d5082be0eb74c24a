//! Login form state and validation.
//!
//! `LoginForm` holds the raw field values as the user types. Nothing is
//! checked until [`LoginForm::submit`], which validates both fields and
//! either hands the values to a [`SubmitHandler`] or records per-field errors.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Field, FieldError, FieldErrors, LoginValues, ValidationRules};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

/// Checks every field independently and returns all failures.
pub fn validate(values: &LoginValues, rules: &ValidationRules) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !is_valid_email(&values.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    // Counted in UTF-16 code units, as browser string length is.
    if values.password.encode_utf16().count() < rules.min_password_len {
        errors.insert(
            Field::Password,
            FieldError::PasswordTooShort {
                min: rules.min_password_len,
            },
        );
    }

    errors
}

impl LoginValues {
    pub fn validate(&self, rules: &ValidationRules) -> Result<(), FieldErrors> {
        let errors = validate(self, rules);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Submit collaborator
// ============================================================================

/// Receives the values of a submission that passed validation.
pub trait SubmitHandler {
    fn on_valid_submit(&mut self, values: LoginValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(LoginValues),
{
    fn on_valid_submit(&mut self, values: LoginValues) {
        self(values)
    }
}

/// Records the submission in the log and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
    fn on_valid_submit(&mut self, values: LoginValues) {
        log::info!("Login submitted for {}", values.email);
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    values: LoginValues,
    password_visible: bool,
    errors: FieldErrors,
    rules: ValidationRules,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &str {
        &self.values.email
    }

    pub fn password(&self) -> &str {
        &self.values.password
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Stores a keystroke. Errors from the last submit stay as they are.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.values.email = value,
            Field::Password => self.values.password = value,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validates both fields. On success the handler is called once with the
    /// current values and the error map is cleared. On failure the error map
    /// is replaced and the handler is not called.
    ///
    /// Field values are left untouched either way.
    pub fn submit<H>(&mut self, handler: &mut H) -> Result<(), FieldErrors>
    where
        H: SubmitHandler + ?Sized,
    {
        match self.values.validate(&self.rules) {
            Ok(()) => {
                self.errors.clear();
                handler.on_valid_submit(self.values.clone());
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}
