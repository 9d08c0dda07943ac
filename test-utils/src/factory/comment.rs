//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    commenter_id: i32,
    contents: String,
    created_date: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - contents: `"Comment {id}"` where id is auto-incremented
    /// - created_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `article_id` - Article the comment belongs to
    /// - `commenter_id` - User writing the comment
    pub fn new(db: &'a DatabaseConnection, article_id: i32, commenter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            article_id,
            commenter_id,
            contents: format!("Comment {}", id),
            created_date: Utc::now(),
        }
    }

    pub fn contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            contents: ActiveValue::Set(self.contents),
            article_id: ActiveValue::Set(self.article_id),
            commenter_id: ActiveValue::Set(self.commenter_id),
            created_date: ActiveValue::Set(self.created_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    commenter_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, commenter_id)
        .build()
        .await
}
