use crate::{
    abstract_trait::GroupQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Group as GroupModel,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct GroupRepository {
    db: ConnectionPool,
}

impl GroupRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupQueryRepositoryTrait for GroupRepository {
    async fn find_all(&self) -> Result<Vec<GroupModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let groups = sqlx::query_as::<_, GroupModel>(
            "SELECT group_id, name FROM groups ORDER BY name",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch groups: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(groups)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<GroupModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, GroupModel>(
            "SELECT group_id, name FROM groups WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
