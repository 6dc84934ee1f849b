use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionManager, Hashing, JwtConfig},
    di::DependenciesInject,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(&config.database_url)
            .await
            .context("Failed to create database connection pool")?;

        if config.run_migrations {
            info!("Running database migrations");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
        }

        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::new()) as DynHashing;

        let di_container = DependenciesInject::new(pool, hash, jwt_config.clone());

        Ok(Self {
            jwt_config,
            di_container,
        })
    }
}
