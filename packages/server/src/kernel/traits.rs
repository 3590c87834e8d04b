// Trait definitions for dependency injection
//
// Naming convention: Base* for trait names (e.g., BaseAuthApi)

use async_trait::async_trait;
use auth_client::{AuthApiError, AuthSuccess, LoginRequest, RegisterRequest};

// =============================================================================
// Auth API Trait (Infrastructure - upstream login/register)
// =============================================================================

#[async_trait]
pub trait BaseAuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSuccess, AuthApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthSuccess, AuthApiError>;
}
