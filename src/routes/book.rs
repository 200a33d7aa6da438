//! The canonical book route set. One set, one error policy.

use crate::auth::require_auth;
use crate::handlers::book::{create_book, delete_book, get_book, list_books, update_book};
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Five routes over the book resource. With `protected`, every route is
/// guarded by the bearer-token middleware; startup rejects that combination
/// without a configured secret.
pub fn book_routes(state: AppState, protected: bool) -> Router {
    let router = Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        );
    let router = if protected {
        router.layer(middleware::from_fn_with_state(state.clone(), require_auth))
    } else {
        router
    };
    router.with_state(state)
}
