use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, user::UserError, AppError},
    model::user::{CreateUserParams, SignupParams, UpdateUserParams, User},
};

#[cfg(not(test))]
const PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;
/// Lowest cost bcrypt accepts.
#[cfg(test)]
const PASSWORD_HASH_COST: u32 = 4;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Validated signup form with the plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::UserErr(DuplicateEmail))` - Email already registered
    /// - `Err(AppError::HashErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(UserError::DuplicateEmail(params.email).into());
        }

        let password_hash = bcrypt::hash(&params.password, PASSWORD_HASH_COST)?;

        let email = params.email.clone();
        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
            })
            .await
            .map_err(|err| insert_error(err, email))?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks login credentials.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Email exists and the password matches
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(AppError)` - Database or hashing error
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email.trim()).await? else {
            return Ok(None);
        };

        if user.verify_password(password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Gets all users
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a user by ID, failing with not found when missing
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates a user's profile. Users may only edit themselves.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Session user is someone else
    pub async fn update(&self, params: UpdateUserParams, session_user: &User) -> Result<User, AppError> {
        self.get_owned(params.id, session_user, "update profile").await?;

        let repo = UserRepository::new(self.db);

        Ok(repo.update_name(params).await?)
    }

    /// Deletes a user account along with their articles and comments.
    /// Users may only delete themselves.
    pub async fn delete(&self, id: i32, session_user: &User) -> Result<(), AppError> {
        self.get_owned(id, session_user, "delete account").await?;

        let repo = UserRepository::new(self.db);
        repo.delete(id).await?;

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    async fn get_owned(&self, id: i32, session_user: &User, action: &str) -> Result<User, AppError> {
        let user = self.get_by_id(id).await?;

        if !user.is_same_user(session_user) {
            return Err(AuthError::AccessDenied(
                session_user.id,
                format!("attempted to {} of user {}", action, id),
            )
            .into());
        }

        Ok(user)
    }
}

/// Maps a unique violation from the user insert to `DuplicateEmail`.
///
/// Concurrent signups can both pass the `email_exists` check; the unique index on
/// `email` rejects the second insert.
pub(super) fn insert_error(err: DbErr, email: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail(email).into(),
        _ => err.into(),
    }
}
