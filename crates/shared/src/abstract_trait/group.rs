use crate::{errors::RepositoryError, model::Group as GroupModel};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynGroupQueryRepository = Arc<dyn GroupQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait GroupQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<GroupModel>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<GroupModel>, RepositoryError>;
}
