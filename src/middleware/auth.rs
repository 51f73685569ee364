use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller identity extracted from the token. Inserted as a
/// request extension for downstream handlers; the credential store is not
/// consulted here.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user.id,
        }
    }
}

/// Token gate for every protected route. The token travels in the
/// `auth-token` header; a missing or unverifiable token short-circuits the
/// request with the same 401 in either case.
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = headers
        .get("auth-token")
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthenticated)?;

    let claims = auth::verify_jwt(&state.config.security.jwt_secret, token)
        .map_err(|_| ApiError::Unauthenticated)?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}
