//! Shared application state for all routes, built once at startup.

use crate::auth::TokenVerifier;
use crate::repository::BookRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BookRepository>,
    /// Present when a JWT secret is configured; required for guarded routes.
    pub verifier: Option<TokenVerifier>,
}
