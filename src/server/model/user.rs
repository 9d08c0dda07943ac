//! User domain models and parameters.

use crate::{
    model::user::{SignupDto, UpdateUserDto, UserDto},
    server::{error::validation::ValidationError, util::validate},
};

/// Registered blog user.
///
/// Identity is the email address: two `User` values refer to the same person when their
/// emails match, regardless of how they were loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
        }
    }

    /// Converts the user domain model to a DTO for responses, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Whether `other` is the same person as this user.
    pub fn is_same_user(&self, other: &User) -> bool {
        self.email == other.email
    }

    /// Checks a plain-text password against the stored hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }
}

/// Validated signup form.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub name: String,
    pub email: String,
    /// Plain-text password, hashed by the service before storage.
    pub password: String,
}

impl SignupParams {
    /// Validates the signup form.
    ///
    /// # Returns
    /// - `Ok(SignupParams)` - All fields valid
    /// - `Err(ValidationError)` - First invalid field found (name, email, then password)
    pub fn from_dto(dto: SignupDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate::name(dto.name)?,
            email: validate::email(dto.email)?,
            password: validate::password(dto.password)?,
        })
    }
}

/// Row values for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Validated profile update.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: validate::name(dto.name)?,
        })
    }
}
