use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::error;

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, username, email, first_name, last_name, password,
                   is_active, is_staff, is_superuser, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, username, email, first_name, last_name, password,
                   is_active, is_staff, is_superuser, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up user {}: {:?}", username, e);
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, username, email, first_name, last_name, password,
                   is_active, is_staff, is_superuser, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn group_names(&self, user_id: i32) -> Result<Vec<String>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT g.name
            FROM groups g
            JOIN user_groups ug ON ug.group_id = g.group_id
            WHERE ug.user_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch groups for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(names)
    }

    async fn effective_permissions(
        &self,
        user_id: i32,
    ) -> Result<HashSet<String>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let codenames = sqlx::query_scalar::<_, String>(
            r#"
            SELECT p.codename
            FROM permissions p
            JOIN user_permissions up ON up.permission_id = p.permission_id
            WHERE up.user_id = $1
            UNION
            SELECT p.codename
            FROM permissions p
            JOIN group_permissions gp ON gp.permission_id = p.permission_id
            JOIN user_groups ug ON ug.group_id = gp.group_id
            WHERE ug.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch permissions for user {}: {:?}",
                user_id, e
            );
            RepositoryError::from(e)
        })?;

        Ok(codenames.into_iter().collect())
    }
}
