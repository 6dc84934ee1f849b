use crate::{
    abstract_trait::{
        DynGroupQueryRepository, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::{
        requests::{CreateUserRequest, RegisterRequest},
        responses::{ApiResponse, GroupResponse, RegisterResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::validation,
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct RegisterService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    groups: DynGroupQueryRepository,
    hash: DynHashing,
    jwt: DynJwtService,
}

pub struct RegisterServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub groups: DynGroupQueryRepository,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
}

impl RegisterService {
    pub fn new(deps: RegisterServiceDeps) -> Self {
        let RegisterServiceDeps {
            query,
            command,
            groups,
            hash,
            jwt,
        } = deps;

        Self {
            query,
            command,
            groups,
            hash,
            jwt,
        }
    }

    /// Batches every registration check; nothing is persisted unless the
    /// whole set passes. Passwords are compared exactly as submitted.
    async fn validate(&self, req: &RegisterRequest) -> Result<(), ServiceError> {
        let mut errors = Vec::new();

        if self.query.find_by_email(&req.email).await?.is_some() {
            errors.push(validation::duplicate_email(&req.email));
        }

        if self.query.find_by_username(&req.username).await?.is_some() {
            errors.push(validation::duplicate_username(&req.username));
        }

        if req.password != req.confirm_password {
            errors.push(validation::password_mismatch());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(errors))
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<RegisterResponse>, ServiceError> {
        info!("📝 [REGISTER] New registration | Username: {}", req.username);

        self.validate(req).await?;

        let hashed = self.hash.hash_password(&req.password).await?;

        let new_request = CreateUserRequest {
            username: req.username.clone(),
            email: req.email.clone(),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            password: hashed,
        };

        let new_user = match self.command.create_user(&new_request).await {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists(_)) => {
                // Lost a race against a concurrent registration; same
                // outcome as the pre-check.
                return Err(ServiceError::Validation(vec![
                    validation::duplicate_username(&req.username),
                ]));
            }
            Err(err) => {
                error!("❌ [REGISTER] Failed to create user: {err:?}");
                return Err(ServiceError::Repo(err));
            }
        };

        // An unknown group downgrades the outcome to a warning instead of
        // failing the registration.
        let mut attached_group = None;
        let mut group_warning = None;

        if let Some(group_name) = req.group.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            match self.groups.find_by_name(group_name).await? {
                Some(group) => {
                    self.command
                        .add_to_group(new_user.user_id, group.group_id)
                        .await?;
                    attached_group = Some(group.name);
                }
                None => {
                    warn!("⚠️ [REGISTER] Group \"{group_name}\" does not exist");
                    group_warning = Some(format!(
                        "User \"{}\" created but the group \"{group_name}\" does not exist",
                        new_user.username
                    ));
                }
            }
        }

        let access_token = self.jwt.generate_token(i64::from(new_user.user_id), "access")?;

        info!(
            "✅ [REGISTER] User registered successfully: {} ({})",
            new_user.username, new_user.email
        );

        let data = RegisterResponse {
            user: UserResponse::from(new_user),
            access_token,
            attached_group: attached_group.clone(),
        };

        match group_warning {
            Some(message) => Ok(ApiResponse::warning(message, data)),
            None => {
                let message = match attached_group {
                    Some(group) => format!(
                        "User \"{}\" created and added to group \"{group}\"",
                        data.user.username
                    ),
                    None => format!("User \"{}\" created successfully", data.user.username),
                };
                Ok(ApiResponse::success(message, data))
            }
        }
    }

    async fn available_groups(&self) -> Result<ApiResponse<Vec<GroupResponse>>, ServiceError> {
        let groups = self.groups.find_all().await?;

        Ok(ApiResponse::success(
            "Available groups",
            groups.into_iter().map(GroupResponse::from).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{DynHashing, DynJwtService, HashingTrait, UserQueryRepositoryTrait};
    use crate::config::{Hashing, JwtConfig};
    use crate::errors::FieldErrorCode;
    use crate::service::test_support::InMemoryDirectory;
    use std::sync::Arc;

    fn register_request(username: &str, email: &str, group: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "s3cret-pass".to_string(),
            confirm_password: "s3cret-pass".to_string(),
            group: group.map(|g| g.to_string()),
        }
    }

    fn service_with(directory: Arc<InMemoryDirectory>) -> RegisterService {
        RegisterService::new(RegisterServiceDeps {
            query: directory.clone(),
            command: directory.clone(),
            groups: directory,
            hash: Arc::new(Hashing::new()) as DynHashing,
            jwt: Arc::new(JwtConfig::new("test-secret")) as DynJwtService,
        })
    }

    #[tokio::test]
    async fn registration_creates_the_user_and_opens_a_session() {
        let directory = Arc::new(InMemoryDirectory::new(&["Editors"]));
        let service = service_with(directory.clone());

        let response = service
            .register(&register_request("alice", "alice@example.com", Some("Editors")))
            .await
            .unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.user.username, "alice");
        assert_eq!(response.data.attached_group.as_deref(), Some("Editors"));
        assert!(!response.data.access_token.is_empty());
        assert_eq!(directory.user_count(), 1);
    }

    #[tokio::test]
    async fn stored_credential_is_a_hash_that_verifies() {
        let directory = Arc::new(InMemoryDirectory::new(&[]));
        let service = service_with(directory.clone());

        service
            .register(&register_request("alice", "alice@example.com", None))
            .await
            .unwrap();

        let stored = directory.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password, "s3cret-pass");

        let hash = Hashing::new();
        assert!(
            hash.compare_password(&stored.password, "s3cret-pass")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn duplicate_email_fails_and_creates_nothing() {
        let directory = Arc::new(InMemoryDirectory::new(&[]));
        directory.insert_user("existing", "alice@example.com", "hash");
        let service = service_with(directory.clone());

        let err = service
            .register(&register_request("alice", "alice@example.com", None))
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, FieldErrorCode::DuplicateEmail);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(directory.user_count(), 1);
    }

    #[tokio::test]
    async fn mismatched_passwords_fail() {
        let directory = Arc::new(InMemoryDirectory::new(&[]));
        let service = service_with(directory.clone());

        let mut req = register_request("alice", "alice@example.com", None);
        req.confirm_password = "different".to_string();

        let err = service.register(&req).await.unwrap_err();

        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, FieldErrorCode::PasswordMismatch);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(directory.user_count(), 0);
    }

    #[tokio::test]
    async fn unknown_group_still_creates_the_user_with_a_warning() {
        let directory = Arc::new(InMemoryDirectory::new(&["Editors"]));
        let service = service_with(directory.clone());

        let response = service
            .register(&register_request("alice", "alice@example.com", Some("Ghosts")))
            .await
            .unwrap();

        assert_eq!(response.status, "warning");
        assert!(response.message.contains("Ghosts"));
        assert!(response.data.attached_group.is_none());
        assert_eq!(directory.user_count(), 1);
    }
}
