use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, GroupResponse, Principal, RegisterResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;
pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;
pub type DynIdentityService = Arc<dyn IdentityServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<RegisterResponse>, ServiceError>;
    async fn available_groups(&self) -> Result<ApiResponse<Vec<GroupResponse>>, ServiceError>;
}

#[async_trait]
pub trait LoginServiceTrait {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
}

#[async_trait]
pub trait IdentityServiceTrait {
    /// Resolves a verified token subject into a request principal. Returns
    /// `None` for unknown or deactivated users, which callers treat as
    /// unauthenticated.
    async fn resolve_principal(&self, user_id: i32) -> Result<Option<Principal>, ServiceError>;
}
