pub mod errors;
pub mod flow;
pub mod models;
pub mod validation;

pub use errors::{extract_error_message, AuthError};
pub use flow::{current_session, logout, AuthFlow, LOGIN_SUCCESS, SIGNUP_SUCCESS};
pub use models::alert::{Alert, AlertKind, AUTO_DISMISS};
pub use models::session::AuthSession;
pub use validation::{validate_login, validate_signup};

pub use auth_client::{LoginRequest, RegisterRequest};
