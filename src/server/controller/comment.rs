use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form, Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentRequestDto, CommentsDto},
    },
    server::{
        error::{page::PageError, AppError},
        middleware::auth::AuthGuard,
        model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments of an article.
///
/// Comments are returned oldest first, each with its commenter.
///
/// # Returns
/// - `200 OK` - The article's comments
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentsDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments = service.get_by_article_id(id).await?;

    Ok(Json(CommentsDto {
        comments: comments.into_iter().map(Comment::into_dto).collect(),
    }))
}

/// Comment on an article.
///
/// # Access Control
/// - Any logged-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Article to comment on
/// - `payload` - Comment contents
///
/// # Returns
/// - `201 Created` - The new comment
/// - `303 See Other` - Redirect to `/login` when anonymous
/// - `400 Bad Request` - Contents blank
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    request_body = CommentRequestDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 303, description = "Not logged in, redirect to login page"),
        (status = 400, description = "Contents blank", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CommentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateCommentParams::from_dto(id, user.id, payload)?;

    let service = CommentService::new(&state.db);
    let comment = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Comment form on the article page.
///
/// # Returns
/// - `303 See Other` - Redirect back to the article page, or to `/login` when anonymous
/// - `400 Bad Request` - Error page when contents are blank
/// - `404 Not Found` - No article with that ID
pub async fn post_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(payload): Form<CommentRequestDto>,
) -> Result<impl IntoResponse, PageError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateCommentParams::from_dto(id, user.id, payload).map_err(AppError::from)?;

    CommentService::new(&state.db).create(params).await?;

    Ok(Redirect::to(&format!("/articles/{}", id)))
}

/// Edit a comment.
///
/// # Access Control
/// - Only the commenter
///
/// # Returns
/// - `200 OK` - The updated comment
/// - `303 See Other` - Redirect to `/login` when anonymous
/// - `400 Bad Request` - Contents blank
/// - `403 Forbidden` - Logged-in user did not write the comment
/// - `404 Not Found` - No such comment on that article
#[utoipa::path(
    put,
    path = "/api/articles/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = CommentRequestDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 303, description = "Not logged in, redirect to login page"),
        (status = 400, description = "Contents blank", body = ErrorDto),
        (status = 403, description = "Not the commenter", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path((id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<CommentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    tracing::debug!("User {} updating comment {}", user.id, comment_id);

    let params = UpdateCommentParams::from_dto(comment_id, id, payload)?;

    let service = CommentService::new(&state.db);
    let comment = service.update(params, &user).await?;

    Ok(Json(comment.into_dto()))
}

/// Delete a comment.
///
/// # Access Control
/// - Only the commenter
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `303 See Other` - Redirect to `/login` when anonymous
/// - `403 Forbidden` - Logged-in user did not write the comment
/// - `404 Not Found` - No such comment on that article
#[utoipa::path(
    delete,
    path = "/api/articles/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 303, description = "Not logged in, redirect to login page"),
        (status = 403, description = "Not the commenter", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    tracing::debug!("User {} deleting comment {}", user.id, comment_id);

    let service = CommentService::new(&state.db);
    service.delete(id, comment_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
