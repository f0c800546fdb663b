use std::fmt::Debug;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::response::MessageResponse;
use crate::config::state::AppState;

/// Subject recorded for requests that were not authenticated
pub const ANONYMOUS_SUBJECT: &str = "anonymous";

/// Identity produced by an authenticator, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self { subject: ANONYMOUS_SUBJECT.to_string() }
    }

    pub fn is_anonymous(&self) -> bool {
        self.subject == ANONYMOUS_SUBJECT
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    #[error("Missing credentials")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let mut response: Response = (
            StatusCode::UNAUTHORIZED,
            Json(MessageResponse::new(self.to_string())),
        )
            .into_response();

        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        response
    }
}

/// Decides who is making a request, or rejects it
pub trait Authenticator: Debug + Send + Sync + 'static {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthRejection>;
}

/// Accepts every request as the anonymous principal
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Authenticator for PassThrough {
    fn authenticate(&self, _headers: &HeaderMap) -> Result<Principal, AuthRejection> {
        Ok(Principal::anonymous())
    }
}

/// Requires `Authorization: Bearer <token>` matching a single configured token
#[derive(Clone)]
pub struct StaticTokenAuthenticator {
    token: String,
}

impl StaticTokenAuthenticator {
    pub const SUBJECT: &'static str = "token";

    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

// Keep the token out of logs
impl Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenAuthenticator").finish_non_exhaustive()
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AuthRejection> {
        let value: &str = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthRejection::MissingCredentials)?
            .to_str()
            .map_err(|_| AuthRejection::InvalidCredentials)?;

        // Auth schemes are case-insensitive
        let presented: &str = match value.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") => token.trim(),
            _ => return Err(AuthRejection::InvalidCredentials),
        };

        if !tokens_match(presented, &self.token) {
            return Err(AuthRejection::InvalidCredentials);
        }

        Ok(Principal { subject: Self::SUBJECT.to_string() })
    }
}

/// Compares tokens in constant time
fn tokens_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Runs the configured authenticator before the matched handler
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let principal: Principal = state
        .authenticator
        .authenticate(request.headers())
        .inspect_err(|rejection| {
            warn!(path = %request.uri().path(), "Request rejected: {}", rejection);
        })?;

    debug!(subject = %principal.subject, "Request authenticated");

    // Available to handlers through `Extension<Principal>`
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
