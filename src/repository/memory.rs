//! In-memory repository. Backs the test suite and the database-less dev mode;
//! the lock is the storage engine's whole atomicity story here.

use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};
use crate::repository::BookRepository;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBookRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    books: HashMap<i32, Book>,
    next_id: i32,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, new: NewBook) -> Result<Book, AppError> {
        let mut inner = self.inner.write().expect("lock poisoned");
        inner.next_id += 1;
        let book = Book {
            id: inner.next_id,
            name: new.name,
            page_count: new.page_count,
            category: new.category,
            author: new.author,
        };
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, AppError> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner.books.get(&id).cloned())
    }

    async fn update(&self, id: i32, patch: BookPatch) -> Result<Option<Book>, AppError> {
        let mut inner = self.inner.write().expect("lock poisoned");
        match inner.books.get_mut(&id) {
            Some(book) => {
                patch.apply(book);
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut inner = self.inner.write().expect("lock poisoned");
        Ok(inner.books.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewBook {
        NewBook {
            name: "Dune".into(),
            page_count: 412,
            category: "Sci-Fi".into(),
            author: "Herbert".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_created_row() {
        let repo = InMemoryBookRepository::new();
        let created = repo.create(dune()).await.unwrap();
        assert!(created.id > 0);

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Dune");
        assert_eq!(fetched.page_count, 412);
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let repo = InMemoryBookRepository::new();
        let a = repo.create(dune()).await.unwrap();
        let b = repo.create(dune()).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn get_update_delete_absent_id_signal_not_found() {
        let repo = InMemoryBookRepository::new();
        assert!(repo.get(42).await.unwrap().is_none());
        assert!(repo
            .update(42, BookPatch::default())
            .await
            .unwrap()
            .is_none());
        assert!(!repo.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let repo = InMemoryBookRepository::new();
        let created = repo.create(dune()).await.unwrap();

        let patch = BookPatch {
            name: Some("Dune Messiah".into()),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.name, "Dune Messiah");
        assert_eq!(updated.page_count, 412);
        assert_eq!(updated.category, "Sci-Fi");
        assert_eq!(updated.author, "Herbert");
    }

    #[tokio::test]
    async fn delete_twice_second_is_not_found() {
        let repo = InMemoryBookRepository::new();
        let created = repo.create(dune()).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
