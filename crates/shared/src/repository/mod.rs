mod group;
mod product;
mod user;

pub use self::group::GroupRepository;
pub use self::product::ProductRepository;
pub use self::user::UserRepository;
