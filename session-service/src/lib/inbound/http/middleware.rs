use auth::Claims;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::session::errors::SessionError;

/// Extension type holding the verified claims of the caller
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub claims: Claims,
}

/// Middleware that validates access tokens and adds the caller to request extensions.
///
/// Any failure ends the request with 401 before the handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?.to_string();

    let claims = state
        .session_service
        .authenticate(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = ?e, "Access token rejected");
            ApiError::from(e)
        })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!("Failed to parse user ID from token: {}", e);
        ApiError::from(SessionError::MalformedToken(e.to_string()))
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, claims });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::from(SessionError::MissingToken))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| invalid_authorization_header())?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(invalid_authorization_header)?;

    if token.is_empty() {
        return Err(ApiError::from(SessionError::MissingToken));
    }

    Ok(token)
}

fn invalid_authorization_header() -> ApiError {
    ApiError::Unauthorized("invalid authorization header".to_string())
}
