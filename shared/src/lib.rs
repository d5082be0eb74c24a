pub mod login;
pub mod types;

pub use login::{is_valid_email, validate, LogSubmit, LoginForm, SubmitHandler};
pub use types::{Field, FieldError, FieldErrors, LoginValues, ValidationRules};
