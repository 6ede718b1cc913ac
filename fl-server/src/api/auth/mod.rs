pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod user_dto;
pub mod verified_user_dto;
pub mod verify_response;
