pub mod authenticate_request;
pub mod login_user;
pub mod register_user;
