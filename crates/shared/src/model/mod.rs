mod group;
mod product;
mod user;

pub use self::group::{Group, Permission};
pub use self::product::Product;
pub use self::user::User;
