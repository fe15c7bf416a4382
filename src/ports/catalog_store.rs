use crate::domain::{Book, Isbn};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログストアポート
///
/// 書籍の検索と保存を抽象化する。
/// 実装はデータベース、インメモリなどが考えられる。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// ISBNで書籍を取得する
    ///
    /// 存在しない場合は`None`を返す。
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>>;

    /// 書籍を保存する（新規・更新どちらも）
    async fn save(&self, book: &Book) -> Result<()>;

    /// 貸出可能な書籍の一覧を取得する
    async fn find_available(&self) -> Result<Vec<Book>>;
}
