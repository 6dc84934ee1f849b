use crate::{
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError>;
    async fn find_by_username(&self, username: &str)
    -> Result<Option<UserModel>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
    async fn group_names(&self, user_id: i32) -> Result<Vec<String>, RepositoryError>;
    /// Direct grants unioned with the grants of every group the user
    /// belongs to.
    async fn effective_permissions(&self, user_id: i32)
    -> Result<HashSet<String>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
    async fn add_to_group(&self, user_id: i32, group_id: i32) -> Result<(), RepositoryError>;
}
