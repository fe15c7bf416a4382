use crate::domain::{Book, Isbn};
use crate::ports::catalog_store::{CatalogStore as CatalogStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Book {
    Book {
        isbn: Isbn::new(row.get::<String, _>("isbn")),
        title: row.get("title"),
        author: row.get("author"),
        available: row.get("available"),
    }
}

/// CatalogStoreのPostgreSQL実装
///
/// booksテーブルに書籍を保存する。
pub struct CatalogStore {
    pool: PgPool,
}

impl CatalogStore {
    /// PostgreSQLコネクションプールから新しいCatalogStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStoreTrait for CatalogStore {
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT isbn, title, author, available
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    /// 書籍を保存（upsert）
    async fn save(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO books (isbn, title, author, available, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (isbn)
            DO UPDATE SET
                title = EXCLUDED.title,
                author = EXCLUDED.author,
                available = EXCLUDED.available,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(book.isbn.value())
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.available)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 貸出可能な書籍をISBN順に取得
    async fn find_available(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT isbn, title, author, available
            FROM books
            WHERE available = TRUE
            ORDER BY isbn ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }
}
