use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, article::ArticleDto, article::ArticleFormDto},
    server::{
        error::{page::PageError, AppError},
        middleware::auth::AuthGuard,
        model::{
            article::{Article, CreateArticleParams, UpdateArticleParams},
            comment::Comment,
            user::User,
        },
        service::{article::ArticleService, comment::CommentService},
        state::AppState,
        view::{
            self,
            article::{
                ArticleEditPage, ArticleEditPageProps, ArticlePage, ArticlePageProps, IndexPage,
                IndexPageProps,
            },
        },
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Home page listing all articles, newest first.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, PageError> {
    let current_user = AuthGuard::new(&state.db, &session).current_user().await?;

    let service = ArticleService::new(&state.db);
    let articles = service.get_all().await?;

    Ok(view::render(
        IndexPage,
        IndexPageProps {
            current_user: current_user.map(User::into_dto),
            articles: articles.into_iter().map(Article::into_dto).collect(),
        },
    ))
}

/// Form for writing a new article. Login required.
pub async fn new_article_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, PageError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok(view::render(
        ArticleEditPage,
        ArticleEditPageProps {
            current_user: Some(user.into_dto()),
            article: None,
            message: None,
        },
    ))
}

/// Publishes an article from the new-article form.
///
/// # Returns
/// - `303 See Other` - Redirect to the new article's page
/// - `303 See Other` - Redirect to `/login` when anonymous
/// - `400 Bad Request` - Form page with the reason when title or contents are blank
pub async fn create_article(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<ArticleFormDto>,
) -> Result<Response, PageError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let params = match CreateArticleParams::from_dto(user.id, payload) {
        Ok(params) => params,
        Err(err) => {
            let page = view::render(
                ArticleEditPage,
                ArticleEditPageProps {
                    current_user: Some(user.into_dto()),
                    article: None,
                    message: Some(err.to_string()),
                },
            );

            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let service = ArticleService::new(&state.db);
    let article = service.create(params).await?;

    Ok(Redirect::to(&format!("/articles/{}", article.id)).into_response())
}

/// Article page with its comments.
///
/// # Returns
/// - `200 OK` - Article page
/// - `404 Not Found` - No article with that ID
pub async fn article_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, PageError> {
    let current_user = AuthGuard::new(&state.db, &session).current_user().await?;

    let article = ArticleService::new(&state.db).get_by_id(id).await?;
    let comments = CommentService::new(&state.db).get_by_article_id(id).await?;

    Ok(view::render(
        ArticlePage,
        ArticlePageProps {
            current_user: current_user.map(User::into_dto),
            article: article.into_dto(),
            comments: comments.into_iter().map(Comment::into_dto).collect(),
        },
    ))
}

/// Get an article by ID.
///
/// # Returns
/// - `200 OK` - The article with its author
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let article = service.get_by_id(id).await?;

    Ok(Json(article.into_dto()))
}

/// Edit form for an article. Author only.
///
/// # Returns
/// - `200 OK` - Edit form filled with the article
/// - `303 See Other` - Redirect to `/login` when anonymous
/// - `403 Forbidden` - Logged-in user is not the author
/// - `404 Not Found` - No article with that ID
pub async fn edit_article_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, PageError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ArticleService::new(&state.db);
    let article = service.get_for_edit(id, &user).await?;

    Ok(view::render(
        ArticleEditPage,
        ArticleEditPageProps {
            current_user: Some(user.into_dto()),
            article: Some(article.into_dto()),
            message: None,
        },
    ))
}

/// Replaces an article's title, cover and contents. Author only.
///
/// # Returns
/// - `303 See Other` - Redirect to the article page, or to `/login` when anonymous
/// - `400 Bad Request` - Title or contents blank
/// - `403 Forbidden` - Logged-in user is not the author
/// - `404 Not Found` - No article with that ID
pub async fn update_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(payload): Form<ArticleFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    tracing::debug!("User {} updating article {}", user.id, id);

    let params = UpdateArticleParams::from_dto(id, payload)?;

    let service = ArticleService::new(&state.db);
    let article = service.update(params, &user).await?;

    Ok(Redirect::to(&format!("/articles/{}", article.id)))
}

/// Deletes an article and its comments. Author only.
///
/// # Returns
/// - `303 See Other` - Redirect to `/`, or to `/login` when anonymous
/// - `403 Forbidden` - Logged-in user is not the author
/// - `404 Not Found` - No article with that ID
pub async fn delete_article(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    tracing::debug!("User {} deleting article {}", user.id, id);

    let service = ArticleService::new(&state.db);
    service.delete(id, &user).await?;

    Ok(Redirect::to("/"))
}
