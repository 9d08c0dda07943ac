use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user. Never carries the password.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Signup form submitted to `POST /users`.
#[derive(Deserialize, Clone, Debug)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form submitted to `POST /login`.
#[derive(Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Profile edit form submitted to `PUT /users/{id}/mypage-edit`.
#[derive(Deserialize, Clone, Debug)]
pub struct UpdateUserDto {
    pub name: String,
}
