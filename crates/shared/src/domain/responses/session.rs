use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Authenticated-user snapshot resolved once per request by the identity
/// layer: who is acting, which groups they belong to, and the effective
/// permission codenames (direct grants unioned with group grants).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
    pub is_superuser: bool,
    pub groups: Vec<String>,
    pub permissions: HashSet<String>,
}
