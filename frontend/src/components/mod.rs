mod form_field;
mod google_button;
mod password_input;

pub use form_field::{error_id, FormField};
pub use google_button::GoogleButton;
pub use password_input::PasswordInput;
