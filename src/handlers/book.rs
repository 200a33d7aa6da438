//! Book CRUD handlers: extract input, call the repository, map to HTTP.
//!
//! Extractors are taken as `Result` so malformed bodies and non-integer ids
//! land in the JSON error shape instead of axum's plain-text rejections.

use crate::error::AppError;
use crate::model::{BookPatch, NewBook};
use crate::state::AppState;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body for a successful delete.
#[derive(Serialize, ToSchema)]
pub struct DeleteAck {
    pub message: String,
}

fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

fn reject_path(rejection: PathRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Livro criado", body = crate::model::Book),
        (status = 400, description = "Entrada inválida"),
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(new) = payload.map_err(reject_body)?;
    let book = state.repo.create(new).await?;
    tracing::info!(id = book.id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Todos os livros", body = [crate::model::Book]),
    ),
)]
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let books = state.repo.list().await?;
    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Identificador do livro")),
    responses(
        (status = 200, description = "Detalhes do livro", body = crate::model::Book),
        (status = 404, description = "Livro não encontrado"),
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(reject_path)?;
    let book = state.repo.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(book))
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Identificador do livro")),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Livro atualizado", body = crate::model::Book),
        (status = 404, description = "Livro não encontrado"),
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<BookPatch>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(reject_path)?;
    let Json(patch) = payload.map_err(reject_body)?;
    let book = state
        .repo
        .update(id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(id, "book updated");
    Ok(Json(book))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Identificador do livro")),
    responses(
        (status = 200, description = "Livro removido", body = DeleteAck),
        (status = 404, description = "Livro não encontrado"),
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(reject_path)?;
    if !state.repo.delete(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "book deleted");
    Ok(Json(DeleteAck {
        message: "Livro deletado com sucesso".into(),
    }))
}
