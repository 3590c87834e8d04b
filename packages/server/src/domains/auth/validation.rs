use auth_client::{LoginRequest, RegisterRequest};

use super::AuthError;

pub fn validate_login(request: &LoginRequest) -> Result<(), AuthError> {
    if request.email_or_username.trim().is_empty() || request.password.is_empty() {
        return Err(AuthError::Validation(
            "Please enter your email or username and password.".to_string(),
        ));
    }
    Ok(())
}

/// Client-side signup checks. A failure here means no request is sent.
pub fn validate_signup(request: &RegisterRequest) -> Result<(), AuthError> {
    if request.username.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(AuthError::Validation(
            "Please fill in all required fields.".to_string(),
        ));
    }

    if !request.email.contains('@') {
        return Err(AuthError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }

    if request.password != request.confirm_password {
        return Err(AuthError::Validation("Passwords do not match.".to_string()));
    }

    Ok(())
}
