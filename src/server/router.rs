//! Route table, OpenAPI document and middleware stack.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        article::ArticleDto,
        comment::{CommentDto, CommentRequestDto, CommentsDto},
        user::UserDto,
    },
    server::{
        controller::{article, auth, comment, user},
        middleware::basic_auth::basic_auth,
        state::AppState,
    },
};

/// OpenAPI document for the JSON endpoints under `/api`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "myblog API",
        description = "JSON access to articles and their comments."
    ),
    paths(
        article::get_article,
        comment::get_comments,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
    ),
    components(schemas(ArticleDto, CommentDto, CommentsDto, CommentRequestDto, UserDto, ErrorDto)),
    tags(
        (name = "article", description = "Blog articles"),
        (name = "comment", description = "Comments on articles")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(article::index))
        .route("/signup", get(auth::signup_page))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/users", get(user::users_page).post(auth::signup))
        .route("/users/{id}/mypage", get(user::mypage))
        .route(
            "/users/{id}/mypage-edit",
            get(user::edit_page)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/articles", post(article::create_article))
        .route("/articles/edit", get(article::new_article_page))
        .route(
            "/articles/{id}",
            get(article::article_page)
                .put(article::update_article)
                .delete(article::delete_article),
        )
        .route("/articles/{id}/edit", get(article::edit_article_page))
        .route("/articles/{id}/comments", post(comment::post_comment))
        .route("/api/articles/{id}", get(article::get_article))
        .route(
            "/api/articles/{id}/comments",
            get(comment::get_comments).post(comment::create_comment),
        )
        .route(
            "/api/articles/{id}/comments/{comment_id}",
            put(comment::update_comment).delete(comment::delete_comment),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the complete application with its middleware stack.
///
/// Layers run outermost first: request tracing, then the session, then Basic
/// credential login, which needs the session to already be loaded.
pub fn app(state: AppState, session: SessionManagerLayer<SqliteStore>) -> Router {
    router()
        .layer(middleware::from_fn_with_state(state.clone(), basic_auth))
        .layer(session)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
