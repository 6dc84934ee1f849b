use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct LoginService {
    query: DynUserQueryRepository,
    hash: DynHashing,
    jwt: DynJwtService,
}

impl LoginService {
    pub fn new(query: DynUserQueryRepository, hash: DynHashing, jwt: DynJwtService) -> Self {
        Self { query, hash, jwt }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔐 [LOGIN] Attempt for username: {}", req.username);

        // Unknown usernames and wrong passwords are indistinguishable to
        // the caller.
        let user = match self.query.find_by_username(&req.username).await? {
            Some(user) => user,
            None => {
                warn!("⚠️ [LOGIN] Unknown username: {}", req.username);
                return Err(ServiceError::InvalidCredentials);
            }
        };

        if !user.is_active {
            warn!("⚠️ [LOGIN] Deactivated account: {}", req.username);
            return Err(ServiceError::InvalidCredentials);
        }

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        let groups = self.query.group_names(user.user_id).await?;
        let access_token = self.jwt.generate_token(i64::from(user.user_id), "access")?;

        let message = if groups.is_empty() {
            format!("Welcome {}! (no groups)", user.username)
        } else {
            format!("Welcome {}! Groups: {}", user.username, groups.join(", "))
        };

        info!("✅ [LOGIN] {} authenticated", user.username);

        Ok(ApiResponse::success(
            message,
            TokenResponse {
                access_token,
                username: user.username,
                groups,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{DynHashing, DynJwtService, HashingTrait, JwtServiceTrait};
    use crate::config::{Hashing, JwtConfig};
    use crate::service::test_support::InMemoryDirectory;
    use std::sync::Arc;

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    async fn service_with_user(groups: &[&str]) -> (LoginService, Arc<InMemoryDirectory>) {
        let hash = Arc::new(Hashing::new()) as DynHashing;
        let jwt = Arc::new(JwtConfig::new("test-secret")) as DynJwtService;

        let directory = Arc::new(InMemoryDirectory::new(groups));
        let password_hash = hash.hash_password("s3cret-pass").await.unwrap();
        let user_id = directory.insert_user("alice", "alice@example.com", &password_hash);
        for group in groups {
            directory.join_group(user_id, group);
        }

        (
            LoginService::new(directory.clone(), hash, jwt),
            directory,
        )
    }

    #[tokio::test]
    async fn correct_credentials_open_a_session_listing_groups() {
        let (service, _) = service_with_user(&["Editors"]).await;

        let response = service
            .login(&login_request("alice", "s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(response.status, "success");
        assert!(response.message.contains("Editors"));
        assert_eq!(response.data.groups, vec!["Editors".to_string()]);
        assert!(!response.data.access_token.is_empty());

        let jwt = JwtConfig::new("test-secret");
        let subject = jwt.verify_token(&response.data.access_token, "access").unwrap();
        assert_eq!(subject, 1);
    }

    #[tokio::test]
    async fn groupless_user_gets_the_no_groups_message() {
        let (service, _) = service_with_user(&[]).await;

        let response = service
            .login(&login_request("alice", "s3cret-pass"))
            .await
            .unwrap();

        assert!(response.message.contains("no groups"));
        assert!(response.data.groups.is_empty());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (service, _) = service_with_user(&[]).await;

        assert!(matches!(
            service.login(&login_request("alice", "wrong")).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn unknown_username_is_indistinguishable_from_wrong_password() {
        let (service, _) = service_with_user(&[]).await;

        assert!(matches!(
            service.login(&login_request("mallory", "s3cret-pass")).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn deactivated_account_cannot_log_in() {
        let (service, directory) = service_with_user(&[]).await;
        directory.deactivate(1);

        assert!(matches!(
            service.login(&login_request("alice", "s3cret-pass")).await,
            Err(ServiceError::InvalidCredentials)
        ));
    }
}
