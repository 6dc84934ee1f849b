use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {}, message: {}, data: {:?} }}",
            self.status, self.message, self.data
        )
    }
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    pub fn warning(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "warning".to_string(),
            message: message.into(),
            data,
        }
    }

    pub fn info(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "info".to_string(),
            message: message.into(),
            data,
        }
    }

    pub fn redirect(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "redirect".to_string(),
            message: message.into(),
            data,
        }
    }
}
