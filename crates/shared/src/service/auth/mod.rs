mod identity;
mod login;
mod register;

pub use self::identity::IdentityService;
pub use self::login::LoginService;
pub use self::register::{RegisterService, RegisterServiceDeps};
