mod error;
mod http;
mod repository;
mod service;
mod validation;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
pub use self::validation::{FieldError, FieldErrorCode};
