//! Article domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::article::{ArticleDto, ArticleFormDto},
    server::{error::validation::ValidationError, model::user::User, util::validate},
};

/// Article together with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub cover_url: String,
    pub contents: String,
    pub author: User,
    pub created_date: DateTime<Utc>,
}

impl Article {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The article row
    /// - `author` - The related user row, loaded alongside the article
    ///
    /// # Returns
    /// - `Ok(Article)` - Converted domain model
    /// - `Err(DbErr::RecordNotFound)` - The author row was missing
    pub fn from_entity(
        entity: entity::article::Model,
        author: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let author = author.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Author {} of article {} not found",
                entity.author_id, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            cover_url: entity.cover_url,
            contents: entity.contents,
            author: User::from_entity(author),
            created_date: entity.created_date,
        })
    }

    /// Converts domain model to DTO for responses.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            cover_url: self.cover_url,
            contents: self.contents,
            author: self.author.into_dto(),
            created_date: self.created_date,
        }
    }

    /// Ownership check: whether `user` wrote this article.
    pub fn is_authored_by(&self, user: &User) -> bool {
        self.author.is_same_user(user)
    }
}

/// Validated values for a new article.
#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub author_id: i32,
    pub title: String,
    pub cover_url: String,
    pub contents: String,
}

impl CreateArticleParams {
    /// Validates the article form for the given author.
    ///
    /// # Returns
    /// - `Ok(CreateArticleParams)` - Title and contents are non-blank
    /// - `Err(ValidationError::Blank)` - Title or contents blank
    pub fn from_dto(author_id: i32, dto: ArticleFormDto) -> Result<Self, ValidationError> {
        Ok(Self {
            author_id,
            title: validate::non_blank("Title", dto.title)?,
            cover_url: dto.cover_url.trim().to_string(),
            contents: validate::non_blank("Contents", dto.contents)?,
        })
    }
}

/// Validated values replacing an article's editable fields.
#[derive(Debug, Clone)]
pub struct UpdateArticleParams {
    pub id: i32,
    pub title: String,
    pub cover_url: String,
    pub contents: String,
}

impl UpdateArticleParams {
    pub fn from_dto(id: i32, dto: ArticleFormDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: validate::non_blank("Title", dto.title)?,
            cover_url: dto.cover_url.trim().to_string(),
            contents: validate::non_blank("Contents", dto.contents)?,
        })
    }
}
