use crate::domain::responses::Principal;
use crate::errors::ServiceError;

/// Members of this group may delete products regardless of their granted
/// permissions; this rule is separate from the generic grant lookup.
pub const ADMINISTRATORS_GROUP: &str = "Administrators";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPermission {
    View,
    Add,
    Change,
    Delete,
}

impl ProductPermission {
    pub fn codename(self) -> &'static str {
        match self {
            ProductPermission::View => "view_product",
            ProductPermission::Add => "add_product",
            ProductPermission::Change => "change_product",
            ProductPermission::Delete => "delete_product",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ProductPermission::View => "view products",
            ProductPermission::Add => "add products",
            ProductPermission::Change => "change products",
            ProductPermission::Delete => "delete products",
        }
    }
}

/// Generic capability check: superusers pass everything, everyone else
/// needs the codename in their effective permission set.
pub fn has_permission(principal: &Principal, permission: ProductPermission) -> bool {
    principal.is_superuser || principal.permissions.contains(permission.codename())
}

/// Elevated deletion rule: superuser or membership in the administrative
/// group. Holding the bare `delete_product` grant is not enough.
pub fn can_delete_products(principal: &Principal) -> bool {
    principal.is_superuser
        || principal
            .groups
            .iter()
            .any(|group| group == ADMINISTRATORS_GROUP)
}

/// Gate used by every workflow before validation or mutation runs.
/// Anonymous callers fail every check.
pub fn require<'a>(
    principal: Option<&'a Principal>,
    permission: ProductPermission,
) -> Result<&'a Principal, ServiceError> {
    match principal {
        Some(principal) if has_permission(principal, permission) => Ok(principal),
        _ => Err(ServiceError::Forbidden(format!(
            "You do not have permission to {}",
            permission.describe()
        ))),
    }
}

pub fn require_delete(principal: Option<&Principal>) -> Result<&Principal, ServiceError> {
    match principal {
        Some(principal) if can_delete_products(principal) => Ok(principal),
        _ => Err(ServiceError::Forbidden(
            "Only superusers or Administrators may delete products".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::principal_with;

    #[test]
    fn superuser_passes_every_check() {
        let principal = principal_with(&[], &[], true);

        assert!(has_permission(&principal, ProductPermission::View));
        assert!(has_permission(&principal, ProductPermission::Delete));
        assert!(can_delete_products(&principal));
    }

    #[test]
    fn grants_union_direct_and_group_permissions() {
        let principal = principal_with(&["view_product", "add_product"], &["Editors"], false);

        assert!(has_permission(&principal, ProductPermission::View));
        assert!(has_permission(&principal, ProductPermission::Add));
        assert!(!has_permission(&principal, ProductPermission::Change));
    }

    #[test]
    fn bare_delete_grant_does_not_allow_deletion() {
        let principal = principal_with(&["delete_product"], &["Editors"], false);

        assert!(has_permission(&principal, ProductPermission::Delete));
        assert!(!can_delete_products(&principal));
        assert!(require_delete(Some(&principal)).is_err());
    }

    #[test]
    fn administrators_group_allows_deletion_without_grant() {
        let principal = principal_with(&[], &[ADMINISTRATORS_GROUP], false);

        assert!(can_delete_products(&principal));
        assert!(require_delete(Some(&principal)).is_ok());
    }

    #[test]
    fn anonymous_caller_is_rejected_everywhere() {
        assert!(matches!(
            require(None, ProductPermission::View),
            Err(ServiceError::Forbidden(_))
        ));
        assert!(matches!(
            require_delete(None),
            Err(ServiceError::Forbidden(_))
        ));
    }
}
