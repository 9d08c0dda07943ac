use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::{auth::AuthError, AppError},
    model::{
        comment::{Comment, CreateCommentParams, UpdateCommentParams},
        user::User,
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to an existing article
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        self.ensure_article_exists(params.article_id).await?;

        let repo = CommentRepository::new(self.db);
        let comment = repo.create(params).await?;

        tracing::info!(
            "User {} commented {} on article {}",
            comment.commenter.id,
            comment.id,
            comment.article_id
        );

        Ok(comment)
    }

    /// Gets the comments of an article, oldest first
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        self.ensure_article_exists(article_id).await?;

        let repo = CommentRepository::new(self.db);

        Ok(repo.get_by_article_id(article_id).await?)
    }

    /// Replaces a comment's contents. Commenter only.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Updated comment
    /// - `Err(AppError::NotFound)` - No such comment on that article
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user` did not write the comment
    pub async fn update(&self, params: UpdateCommentParams, user: &User) -> Result<Comment, AppError> {
        self.get_owned(params.article_id, params.id, user).await?;

        let repo = CommentRepository::new(self.db);

        Ok(repo.update_contents(params.id, params.contents).await?)
    }

    /// Deletes a comment. Commenter only.
    pub async fn delete(&self, article_id: i32, comment_id: i32, user: &User) -> Result<(), AppError> {
        self.get_owned(article_id, comment_id, user).await?;

        let repo = CommentRepository::new(self.db);
        repo.delete(comment_id).await?;

        tracing::info!("User {} deleted comment {}", user.id, comment_id);

        Ok(())
    }

    async fn ensure_article_exists(&self, article_id: i32) -> Result<(), AppError> {
        let repo = ArticleRepository::new(self.db);

        match repo.find_by_id(article_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Article not found".to_string())),
        }
    }

    /// Loads a comment of `article_id`, checking that `user` wrote it
    async fn get_owned(&self, article_id: i32, comment_id: i32, user: &User) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        let comment = repo
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.article_id == article_id)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if !comment.is_written_by(user) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "attempted to modify comment {} by user {}",
                    comment_id, comment.commenter.id
                ),
            )
            .into());
        }

        Ok(comment)
    }
}
