//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::article::ArticleFactory;
///
/// let article = ArticleFactory::new(&db, author.id)
///     .title("Custom title")
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    cover_url: String,
    contents: String,
    created_date: DateTime<Utc>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"` where id is auto-incremented
    /// - cover_url: empty
    /// - contents: `"Contents of article {id}"`
    /// - created_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the user writing the article
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Article {}", id),
            cover_url: String::new(),
            contents: format!("Contents of article {}", id),
            created_date: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    /// Sets the creation timestamp, useful for ordering tests.
    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown author)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            cover_url: ActiveValue::Set(self.cover_url),
            contents: ActiveValue::Set(self.contents),
            author_id: ActiveValue::Set(self.author_id),
            created_date: ActiveValue::Set(self.created_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values for the given author.
pub async fn create_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, author_id).build().await
}
