//! Article data repository.
//!
//! Every query loads the author alongside the article so callers always receive a
//! complete `Article` domain model.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::article::{Article, CreateArticleParams, UpdateArticleParams};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new article stamped with the current time and returns it with its author
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, DbErr> {
        let article = entity::article::ActiveModel {
            title: ActiveValue::Set(params.title),
            cover_url: ActiveValue::Set(params.cover_url),
            contents: ActiveValue::Set(params.contents),
            author_id: ActiveValue::Set(params.author_id),
            created_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(article.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found after creation",
                article.id
            )))
    }

    /// Gets an article by ID with its author
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let result = entity::prelude::Article::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        result
            .map(|(article, author)| Article::from_entity(article, author))
            .transpose()
    }

    /// Gets all articles, newest first
    pub async fn get_all(&self) -> Result<Vec<Article>, DbErr> {
        entity::prelude::Article::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::article::Column::CreatedDate)
            .order_by_desc(entity::article::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(article, author)| Article::from_entity(article, author))
            .collect()
    }

    /// Replaces the editable fields of an article and returns it with its author
    pub async fn update(&self, params: UpdateArticleParams) -> Result<Article, DbErr> {
        let article = entity::prelude::Article::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::article::ActiveModel = article.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.cover_url = ActiveValue::Set(params.cover_url);
        active_model.contents = ActiveValue::Set(params.contents);

        active_model.update(self.db).await?;

        self.find_by_id(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Article with id {} not found after update",
                params.id
            )))
    }

    /// Deletes an article; its comments go with it
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Article::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
