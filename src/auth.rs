//! Bearer-token verification and the route guard middleware.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const MISSING_TOKEN: &str = "Token não fornecido!";
const INVALID_TOKEN: &str = "Autenticação inválida!";

/// Claims carried by an accepted token. Inserted into request extensions
/// by [`require_auth`] so handlers can identify the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
}

/// Validates HS256 tokens against the shared secret, expiry enforced.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_ref())),
            validation: Arc::new({
                let mut validation = Validation::new(Algorithm::HS256);
                validation.validate_exp = true;
                validation
            }),
        }
    }

    /// Decode and verify signature and expiry. Any failure collapses to the
    /// same 401 message; callers get no hint of which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Auth(INVALID_TOKEN.into()))
    }
}

/// Middleware guarding a route set. The header is checked for presence
/// before any use, so a missing header answers 401 instead of faulting.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let verifier = state
        .verifier
        .as_ref()
        .ok_or_else(|| AppError::Auth(INVALID_TOKEN.into()))?;
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Auth(MISSING_TOKEN.into()))?;
    let value = header
        .to_str()
        .map_err(|_| AppError::Auth(INVALID_TOKEN.into()))?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth(MISSING_TOKEN.into()))?;

    let claims = verifier.verify(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
