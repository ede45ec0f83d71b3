//! Account CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::response::{absolute_url, created, ok};
use crate::service::{AccountService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub const ACCOUNTS_PATH: &str = "/accounts";

/// Ids are non-negative integers that fit in u64; anything else does not name an account route.
fn parse_id(id_str: &str) -> Result<u64, AppError> {
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::RouteNotFound(format!("{}/{}", ACCOUNTS_PATH, id_str)));
    }
    id_str
        .parse()
        .map_err(|_| AppError::RouteNotFound(format!("{}/{}", ACCOUNTS_PATH, id_str)))
}

pub fn account_path(id: u64) -> String {
    format!("{}/{}", ACCOUNTS_PATH, id)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let accounts = AccountService::list(&state.store)?;
    Ok(ok(accounts))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::account_fields(body, "")?;
    let account = AccountService::create(&state.store, fields)?;
    let location = absolute_url(state.public_url.as_deref(), &headers, &account_path(account.id));
    Ok(created(account, &location))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let account = AccountService::read(&state.store, id)?;
    Ok(ok(account))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let account = AccountService::update(&state.store, id, || {
        RequestValidator::account_fields(body, " for update")
    })?;
    Ok(ok(account))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    AccountService::delete(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_digits() {
        assert_eq!(parse_id("0").unwrap(), 0);
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        for s in ["", "abc", "-1", "+1", "1.5", " 1", "18446744073709551616"] {
            assert!(matches!(parse_id(s), Err(AppError::RouteNotFound(_))), "{s}");
        }
    }
}
