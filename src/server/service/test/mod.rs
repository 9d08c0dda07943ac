use crate::server::error::{auth::AuthError, user::UserError, AppError};
use test_utils::{builder::TestBuilder, factory};


/// Loads a factory-created user as a domain model.
fn as_user(entity: entity::user::Model) -> crate::server::model::user::User {
    crate::server::model::user::User::from_entity(entity)
}
