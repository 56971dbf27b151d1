//! Bearer-token authentication for the front-office routes.
//!
//! The verification seam is a trait so the static-token check used today can be
//! replaced by a real token issuer without touching request handling.

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated caller. Carried in request extensions once verified.
#[derive(Debug, Clone)]
pub struct Principal {
    pub subject: String,
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, AppError>;
}

/// Verifier that accepts exactly one pre-shared token.
pub struct StaticTokenVerifier {
    expected: String,
}

impl StaticTokenVerifier {
    pub fn new(expected: String) -> Self {
        Self { expected }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AppError> {
        if token == self.expected {
            Ok(Principal {
                subject: "front-office".to_string(),
            })
        } else {
            Err(AppError::Auth("Invalid token".to_string()))
        }
    }
}

/// Extracts the token from a `Bearer <token>` header value.
/// The scheme is matched case-insensitively; at least one whitespace character
/// must separate scheme and token. Returns `None` on any other shape.
pub fn parse_bearer(header: &str) -> Option<&str> {
    if header.len() < 6 || !header.is_char_boundary(6) {
        return None;
    }
    let (scheme, rest) = header.split_at(6);
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim_start();
    // No separating whitespace means something like "BearerXyz".
    if token.len() == rest.len() {
        return None;
    }
    Some(token)
}

/// Middleware guarding the front-office routes. Distinct messages for a missing
/// header, a malformed header, and a rejected token.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if header.is_empty() {
        return Err(AppError::Auth(
            "Authorization header is required".to_string(),
        ));
    }

    let token = parse_bearer(header).ok_or_else(|| {
        AppError::Auth("Invalid authorization header format".to_string())
    })?;

    let principal = state.verifier.verify(token).await?;
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}
