mod auth;
mod group;
mod hashing;
mod jwt;
mod product;
mod user;

pub use self::auth::{
    DynIdentityService, DynLoginService, DynRegisterService, IdentityServiceTrait,
    LoginServiceTrait, RegisterServiceTrait,
};
pub use self::group::{DynGroupQueryRepository, GroupQueryRepositoryTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
