use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::article::ArticleRepository,
    error::{auth::AuthError, AppError},
    model::{
        article::{Article, CreateArticleParams, UpdateArticleParams},
        user::User,
    },
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new article
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        let article = repo.create(params).await?;

        tracing::info!(
            "User {} published article {}",
            article.author.id,
            article.id
        );

        Ok(article)
    }

    /// Gets an article by ID, failing with not found when missing
    pub async fn get_by_id(&self, id: i32) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
    }

    /// Gets all articles, newest first
    pub async fn get_all(&self) -> Result<Vec<Article>, AppError> {
        let repo = ArticleRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Loads an article for its author to edit.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article, written by `user`
    /// - `Err(AppError::NotFound)` - No article with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user` is not the author
    pub async fn get_for_edit(&self, id: i32, user: &User) -> Result<Article, AppError> {
        let article = self.get_by_id(id).await?;

        if !article.is_authored_by(user) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("attempted to modify article {} by user {}", id, article.author.id),
            )
            .into());
        }

        Ok(article)
    }

    /// Replaces the article's title, cover and contents. Author only.
    pub async fn update(&self, params: UpdateArticleParams, user: &User) -> Result<Article, AppError> {
        self.get_for_edit(params.id, user).await?;

        let repo = ArticleRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes an article and its comments. Author only.
    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        self.get_for_edit(id, user).await?;

        let repo = ArticleRepository::new(self.db);
        repo.delete(id).await?;

        tracing::info!("User {} deleted article {}", user.id, id);

        Ok(())
    }
}
