use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UpdateUserDto,
    server::{
        error::{page::PageError, AppError},
        middleware::auth::AuthGuard,
        model::user::{UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
        view::{
            self,
            user::{MyPage, MyPageEdit, MyPageEditProps, MyPageProps, UsersPage, UsersPageProps},
        },
    },
};

/// Lists every registered user.
pub async fn users_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, PageError> {
    let current_user = AuthGuard::new(&state.db, &session).current_user().await?;

    let service = UserService::new(&state.db);
    let users = service.get_all().await?;

    Ok(view::render(
        UsersPage,
        UsersPageProps {
            current_user: current_user.map(User::into_dto),
            users: users.into_iter().map(User::into_dto).collect(),
        },
    ))
}

/// Shows a user's profile.
///
/// # Returns
/// - `200 OK` - Profile page
/// - `404 Not Found` - No user with that ID
pub async fn mypage(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, PageError> {
    let current_user = AuthGuard::new(&state.db, &session).current_user().await?;

    let service = UserService::new(&state.db);
    let user = service.get_by_id(id).await?;

    Ok(view::render(
        MyPage,
        MyPageProps {
            current_user: current_user.map(User::into_dto),
            user: user.into_dto(),
        },
    ))
}

/// Resolves the session user for a profile edit of user `id`.
///
/// # Returns
/// - `Ok(Ok(User))` - The session user is user `id`
/// - `Ok(Err(Redirect))` - Somebody else is logged in; send them home
/// - `Err(AppError::AuthErr(LoginRequired))` - Nobody is logged in
async fn require_self(state: &AppState, session: &Session, id: i32) -> Result<Result<User, Redirect>, AppError> {
    let user = AuthGuard::new(&state.db, session).require().await?;

    if user.id != id {
        tracing::debug!("User {} tried to edit profile of user {}", user.id, id);
        return Ok(Err(Redirect::to("/")));
    }

    Ok(Ok(user))
}

/// Shows the profile edit form for the logged-in user.
///
/// # Returns
/// - `200 OK` - Edit form
/// - `303 See Other` - To `/login` when anonymous, to `/` when editing someone else
pub async fn edit_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, PageError> {
    let user = match require_self(&state, &session, id).await? {
        Ok(user) => user.into_dto(),
        Err(redirect) => return Ok(redirect.into_response()),
    };

    Ok(view::render(
        MyPageEdit,
        MyPageEditProps {
            current_user: Some(user.clone()),
            user,
        },
    )
    .into_response())
}

/// Updates the logged-in user's name.
///
/// # Returns
/// - `303 See Other` - To `/users/{id}/mypage` after saving, `/login` when anonymous,
///   `/` when editing someone else
/// - `400 Bad Request` - Invalid name
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(payload): Form<UpdateUserDto>,
) -> Result<Response, AppError> {
    let user = match require_self(&state, &session, id).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let params = UpdateUserParams::from_dto(id, payload)?;

    let service = UserService::new(&state.db);
    service.update(params, &user).await?;

    Ok(Redirect::to(&format!("/users/{}/mypage", id)).into_response())
}

/// Deletes the logged-in user's account, then logs them out.
///
/// # Returns
/// - `303 See Other` - To `/logout` after deleting, `/login` when anonymous, `/` when
///   deleting someone else
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let user = match require_self(&state, &session, id).await? {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let service = UserService::new(&state.db);
    service.delete(id, &user).await?;

    Ok(Redirect::to("/logout").into_response())
}
