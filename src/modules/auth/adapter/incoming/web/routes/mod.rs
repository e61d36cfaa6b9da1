pub mod login_user;
pub mod logout_user;
pub mod register_user;

// Glob re-exports keep the utoipa-generated path items visible to ApiDoc.
pub use login_user::*;
pub use logout_user::*;
pub use register_user::*;
