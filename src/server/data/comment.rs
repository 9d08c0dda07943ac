//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment stamped with the current time and returns it with its commenter
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            contents: ActiveValue::Set(params.contents),
            article_id: ActiveValue::Set(params.article_id),
            commenter_id: ActiveValue::Set(params.commenter_id),
            created_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(comment.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found after creation",
                comment.id
            )))
    }

    /// Gets a comment by ID with its commenter
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let result = entity::prelude::Comment::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result
            .map(|(comment, commenter)| Comment::from_entity(comment, commenter))
            .transpose()
    }

    /// Gets the comments of an article, oldest first
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment::Column::CreatedDate)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(comment, commenter)| Comment::from_entity(comment, commenter))
            .collect()
    }

    /// Replaces the contents of a comment
    pub async fn update_contents(&self, id: i32, contents: String) -> Result<Comment, DbErr> {
        let comment = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found",
                id
            )))?;

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.contents = ActiveValue::Set(contents);

        active_model.update(self.db).await?;

        self.find_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Comment with id {} not found after update",
            id
        )))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
