use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use sha2::{Digest, Sha256};

use crate::errors::AppError;
use crate::state::AppState;

/// Proof that the request carried the admin bearer token.
/// Add it as a handler argument to guard a route.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        if tokens_match(token, &state.config.admin_token) {
            Ok(AdminUser)
        } else {
            tracing::warn!("Rejected request with invalid admin token");
            Err(AppError::Unauthorized)
        }
    }
}

/// Compares digests so the comparison time does not depend on a shared prefix.
fn tokens_match(given: &str, expected: &str) -> bool {
    !expected.is_empty() && Sha256::digest(given.as_bytes()) == Sha256::digest(expected.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("abc", "abc"));
        assert!(!tokens_match("abd", "abc"));
        assert!(!tokens_match("", "abc"));
    }

    #[test]
    fn test_empty_expected_never_matches() {
        assert!(!tokens_match("", ""));
    }
}
