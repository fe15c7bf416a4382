use crate::domain::{Book, Isbn};
use crate::ports::catalog_store::{CatalogStore as CatalogStoreTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// CatalogStoreのインメモリ実装
///
/// ISBN順に保持するため、一覧はISBN順で返る。
/// 開発用サーバーと統合テストで使用する。
pub struct CatalogStore {
    books: Mutex<BTreeMap<Isbn, Book>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }

    /// 書籍を登録（既存の場合は上書き）
    pub fn add_book(&self, book: Book) {
        self.books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(book.isbn.clone(), book);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStoreTrait for CatalogStore {
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let books = self.books.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(books.get(isbn).cloned())
    }

    async fn save(&self, book: &Book) -> Result<()> {
        self.add_book(book.clone());
        Ok(())
    }

    async fn find_available(&self) -> Result<Vec<Book>> {
        let books = self.books.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(books.values().filter(|b| b.available).cloned().collect())
    }
}
