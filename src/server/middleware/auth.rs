use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the user behind the current session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The session's user
    /// - `Err(AppError::AuthErr(LoginRequired))` - Nobody logged in, or the session user was deleted
    pub async fn require(&self) -> Result<User, AppError> {
        self.current_user()
            .await?
            .ok_or_else(|| AuthError::LoginRequired.into())
    }

    /// Gets the logged-in user, if any.
    ///
    /// A session pointing at a deleted user is cleared and treated as anonymous.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            tracing::debug!("Session user {} no longer exists, clearing session", user_id);
            auth_session.clear().await;
            return Ok(None);
        };

        Ok(Some(user))
    }
}
