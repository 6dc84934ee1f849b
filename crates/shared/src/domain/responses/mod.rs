mod api;
mod auth;
mod group;
mod index;
mod product;
mod session;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::auth::{LoginPageResponse, LogoutResponse, RegisterPageResponse, RegisterResponse};
pub use self::group::GroupResponse;
pub use self::index::IndexResponse;
pub use self::product::{
    DeletedProductResponse, ProductFormResponse, ProductListResponse, ProductResponse,
};
pub use self::session::Principal;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
