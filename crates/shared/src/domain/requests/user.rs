use serde::{Deserialize, Serialize};

/// Insert-ready user record. The password field carries the bcrypt hash;
/// the registration service hashes before building this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}
