//! OpenAPI document derived from the handlers and schemas.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Livraria API", description = "REST CRUD service for a book catalog"),
    paths(
        crate::handlers::book::create_book,
        crate::handlers::book::list_books,
        crate::handlers::book::get_book,
        crate::handlers::book::update_book,
        crate::handlers::book::delete_book,
    ),
    components(schemas(
        crate::model::Book,
        crate::model::NewBook,
        crate::model::BookPatch,
        crate::handlers::book::DeleteAck,
    )),
    tags((name = "books", description = "Gerenciamento de livros"))
)]
pub struct ApiDoc;
