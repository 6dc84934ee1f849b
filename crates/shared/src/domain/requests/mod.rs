mod auth;
mod product;
mod user;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::user::CreateUserRequest;
