use crate::{
    abstract_trait::{DynUserQueryRepository, IdentityServiceTrait},
    domain::responses::Principal,
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::warn;

pub struct IdentityService {
    query: DynUserQueryRepository,
}

impl IdentityService {
    pub fn new(query: DynUserQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn resolve_principal(&self, user_id: i32) -> Result<Option<Principal>, ServiceError> {
        let user = match self.query.find_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !user.is_active {
            warn!("⚠️ Deactivated user {} presented a valid token", user_id);
            return Ok(None);
        }

        let groups = self.query.group_names(user.user_id).await?;
        let permissions = self.query.effective_permissions(user.user_id).await?;

        Ok(Some(Principal {
            user_id: user.user_id,
            username: user.username,
            is_superuser: user.is_superuser,
            groups,
            permissions,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::InMemoryDirectory;
    use std::sync::Arc;

    #[tokio::test]
    async fn resolves_groups_and_grants_into_the_principal() {
        let directory = Arc::new(InMemoryDirectory::new(&["Editors"]));
        let user_id = directory.insert_user("alice", "alice@example.com", "hash");
        directory.join_group(user_id, "Editors");
        directory.grant(user_id, "view_product");

        let service = IdentityService::new(directory);
        let principal = service.resolve_principal(user_id).await.unwrap().unwrap();

        assert_eq!(principal.username, "alice");
        assert_eq!(principal.groups, vec!["Editors".to_string()]);
        assert!(principal.permissions.contains("view_product"));
        assert!(!principal.is_superuser);
    }

    #[tokio::test]
    async fn unknown_or_deactivated_users_resolve_to_none() {
        let directory = Arc::new(InMemoryDirectory::new(&[]));
        let user_id = directory.insert_user("bob", "bob@example.com", "hash");
        directory.deactivate(user_id);

        let service = IdentityService::new(directory);

        assert!(service.resolve_principal(user_id).await.unwrap().is_none());
        assert!(service.resolve_principal(9999).await.unwrap().is_none());
    }
}
