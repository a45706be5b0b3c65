//! Admin cookie gate.
//!
//! Login compares against `ADMIN_USERNAME` / `ADMIN_PASSWORD` and sets an opaque
//! `admin_token` cookie. Admin routes only check that the cookie is present; the
//! token carries no session state and is never verified server side.

use super::error::{AppError, AppResult};
use super::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;
use serde_json::json;

pub const ADMIN_COOKIE: &str = "admin_token";
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Proof that the request carried an admin cookie.
#[derive(Debug, Clone)]
pub struct AdminSession;

impl<S: Send + Sync> FromRequestParts<S> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match cookie_value(&parts.headers, ADMIN_COOKIE) {
            Some(token) if !token.is_empty() => Ok(AdminSession),
            _ => Err(AppError::Unauthorized),
        }
    }
}

/// Value of the first cookie called `name`.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn issue_token(username: &str) -> String {
    let issued_at = chrono::Utc::now().timestamp_millis();
    URL_SAFE_NO_PAD.encode(format!("{username}:{issued_at}"))
}

fn session_cookie(token: &str, max_age: u64, secure: bool) -> String {
    let mut cookie =
        format!("{ADMIN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

fn with_cookie(body: Json<serde_json::Value>, cookie: String) -> AppResult<Response> {
    let value = HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Internal(format!("Invalid cookie: {e}")))?;
    let mut response = body.into_response();
    response.headers_mut().insert(header::SET_COOKIE, value);
    Ok(response)
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload.map_err(|_| AppError::Validation("Invalid request".to_string()))?;

    let Some((username, password)) = state.auth.credentials.as_ref() else {
        return Err(AppError::NotConfigured);
    };
    if &request.username != username || &request.password != password {
        tracing::warn!(username = %request.username, "rejected admin login");
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(username);
    tracing::info!(username = %username, "admin logged in");
    with_cookie(
        Json(json!({ "success": true, "token": token })),
        session_cookie(&token, COOKIE_MAX_AGE_SECS, state.auth.secure_cookies),
    )
}

/// POST /api/admin/logout
pub async fn logout(State(state): State<AppState>) -> AppResult<Response> {
    with_cookie(
        Json(json!({ "success": true })),
        session_cookie("", 0, state.auth.secure_cookies),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; admin_token=abc123; lang=en"),
        );
        assert_eq!(cookie_value(&headers, ADMIN_COOKIE), Some("abc123"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn token_is_cookie_safe() {
        let token = issue_token("admin");
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        let decoded = String::from_utf8(URL_SAFE_NO_PAD.decode(&token).unwrap()).unwrap();
        assert!(decoded.starts_with("admin:"));
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("t", 86400, true);
        assert_eq!(
            cookie,
            "admin_token=t; Path=/; HttpOnly; SameSite=Lax; Max-Age=86400; Secure"
        );
        assert!(!session_cookie("t", 0, false).contains("Secure"));
    }
}
