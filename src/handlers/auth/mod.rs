pub mod create_user;
pub mod get_user;
pub mod login;

pub use create_user::create_user;
pub use get_user::get_user;
pub use login::login;
