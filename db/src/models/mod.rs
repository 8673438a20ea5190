pub mod logger;
pub mod logger_role;
pub mod organization;
pub mod user;

pub use logger::Entity as Logger;
pub use logger_role::Entity as LoggerRole;
pub use organization::Entity as Organization;
pub use user::Entity as User;
