use crate::model::Group;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct GroupResponse {
    pub id: i32,
    pub name: String,
}

impl From<Group> for GroupResponse {
    fn from(value: Group) -> Self {
        GroupResponse {
            id: value.group_id,
            name: value.name,
        }
    }
}
