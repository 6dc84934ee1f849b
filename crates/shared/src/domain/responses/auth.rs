use crate::domain::responses::{GroupResponse, UserResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub access_token: String,
    /// Name of the group the user was attached to, when one resolved.
    pub attached_group: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RegisterPageResponse {
    pub groups: Vec<GroupResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LoginPageResponse {
    pub authenticated: bool,
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LogoutResponse {
    pub username: Option<String>,
}
