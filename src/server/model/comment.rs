//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::comment::{CommentDto, CommentRequestDto},
    server::{error::validation::ValidationError, model::user::User, util::validate},
};

/// Comment together with its commenter.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub contents: String,
    pub commenter: User,
    pub created_date: DateTime<Utc>,
}

impl Comment {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Converted domain model
    /// - `Err(DbErr::RecordNotFound)` - The commenter row was missing
    pub fn from_entity(
        entity: entity::comment::Model,
        commenter: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let commenter = commenter.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Commenter {} of comment {} not found",
                entity.commenter_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            article_id: entity.article_id,
            contents: entity.contents,
            commenter: User::from_entity(commenter),
            created_date: entity.created_date,
        })
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            contents: self.contents,
            created_date: self.created_date,
            commenter: self.commenter.into_dto(),
        }
    }

    /// Ownership check: whether `user` wrote this comment.
    pub fn is_written_by(&self, user: &User) -> bool {
        self.commenter.is_same_user(user)
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub article_id: i32,
    pub commenter_id: i32,
    pub contents: String,
}

impl CreateCommentParams {
    pub fn from_dto(
        article_id: i32,
        commenter_id: i32,
        dto: CommentRequestDto,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            article_id,
            commenter_id,
            contents: validate::non_blank("Contents", dto.contents)?,
        })
    }
}

/// Replacement contents for an existing comment.
///
/// `article_id` comes from the request path and must match the comment's article.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub article_id: i32,
    pub contents: String,
}

impl UpdateCommentParams {
    pub fn from_dto(
        id: i32,
        article_id: i32,
        dto: CommentRequestDto,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            article_id,
            contents: validate::non_blank("Contents", dto.contents)?,
        })
    }
}
