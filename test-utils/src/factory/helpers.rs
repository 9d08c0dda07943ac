//! Shared helper utilities for factory methods.
//!
//! Provides ID generation shared by all factories and convenience methods for creating
//! entities together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an article together with its author.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, article))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::article::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, author.id).await?;

    Ok((author, article))
}

/// Creates a comment with all dependencies.
///
/// Creates an author, an article written by that author, a second user acting as the
/// commenter and finally a comment by the commenter on the article.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, article, commenter, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::article::Model,
        entity::user::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (author, article) = create_article_with_author(db).await?;
    let commenter = crate::factory::user::create_user(db).await?;
    let comment = crate::factory::comment::create_comment(db, article.id, commenter.id).await?;

    Ok((author, article, commenter, comment))
}
