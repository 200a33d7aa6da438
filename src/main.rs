//! Server binary: env → logging → database bootstrap → state → serve.

use livraria::{
    book_routes, common_routes, ensure_books_table, ensure_database_exists, AppState, Config,
    PostgresBookRepository, TokenVerifier,
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("livraria=info")),
        )
        .init();

    let config = Config::from_env()?;

    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_books_table(&pool).await?;
    tracing::info!("conectado ao banco de dados");

    let state = AppState {
        repo: Arc::new(PostgresBookRepository::new(pool)),
        verifier: config.jwt_secret.as_deref().map(TokenVerifier::new),
    };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state, config.protect_books))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("servidor rodando em http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
