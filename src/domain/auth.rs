//! Authentication envelope types
//!
//! Shapes only; token issuance and session handling live in the backend.

use serde::{Deserialize, Serialize};

use super::users::UserResponse;

/// Login request, email is the canonical identifier
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response with the token pair and the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn bearer(access_token: String, refresh_token: String, user: UserResponse) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}

/// Password change request
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
