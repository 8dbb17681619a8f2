//! HTTP route handlers for the tracker API.
//!
//! Handlers validate request input, make a single store call, and shape
//! the JSON response. Domain failures surface as `{"error": ...}` bodies
//! via [`ApiError`].

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Form, Json};

use super::error::ApiError;
use super::request::{CreateUserForm, ExerciseForm, LogParams};
use super::response::{ExerciseAdded, UserCreated, UserLog};
use crate::clock::Clock;
use crate::error::Error;
use crate::filter::{LogQuery, filter_log};
use crate::model::User;
use crate::store::UserStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub clock: Arc<dyn Clock>,
}

/// Handle POST /api/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Result<Json<UserCreated>, ApiError> {
    let username = form.into_username()?;
    let user = state.store.insert_user(username).await?;

    tracing::debug!(user_id = %user.id, username = %user.username, "created user");
    Ok(Json(UserCreated::from(user)))
}

/// Handle GET /api/users
///
/// Returns every user with its complete log, in creation order.
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// Handle POST /api/users/{id}/exercises
///
/// An omitted or empty `date` field defaults to today's UTC date.
pub async fn handle_add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ExerciseForm>,
) -> Result<Json<ExerciseAdded>, ApiError> {
    let session = form.into_session(state.clock.today())?;

    match state.store.append_session(&id, session.clone()).await? {
        Some(user) => {
            tracing::debug!(user_id = %user.id, date = %session.date, "appended session");
            Ok(Json(ExerciseAdded::new(&user, &session)))
        }
        None => Err(Error::NotFound(id).into()),
    }
}

/// Handle GET /api/users/{id}/logs
///
/// The date filter runs only when `from` or `to` is present; `limit`
/// truncates after filtering, keeping the earliest surviving entries.
pub async fn handle_get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<UserLog>, ApiError> {
    let query: LogQuery = params.try_into()?;

    let user = state
        .store
        .find_user(&id)
        .await?
        .ok_or(Error::NotFound(id))?;

    let User { id, username, log } = user;
    let log = filter_log(log, &query);

    Ok(Json(UserLog::new(id, username, log)))
}

/// Handle /-/healthy endpoint - returns 200 OK if service is running
pub async fn handle_healthy() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Handle /-/ready endpoint - returns 200 OK if service is ready to serve requests
pub async fn handle_ready(State(_state): State<AppState>) -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
