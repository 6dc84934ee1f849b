use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users
                (username, email, first_name, last_name, password,
                 is_active, is_staff, is_superuser, created_at)
            VALUES ($1, $2, $3, $4, $5, TRUE, FALSE, FALSE, current_timestamp)
            RETURNING user_id, username, email, first_name, last_name, password,
                      is_active, is_staff, is_superuser, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {}: {:?}", req.username, err);
            RepositoryError::from_sqlx(err, &req.username)
        })?;

        info!("✅ Created user ID {} ({})", result.user_id, result.username);
        Ok(result)
    }

    async fn add_to_group(&self, user_id: i32, group_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            INSERT INTO user_groups (user_id, group_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(group_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to add user {} to group {}: {:?}",
                user_id, group_id, e
            );
            RepositoryError::from(e)
        })?;

        info!("✅ User {} added to group {}", user_id, group_id);
        Ok(())
    }
}
