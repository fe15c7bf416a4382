use serde::{Deserialize, Serialize};

use super::Isbn;

/// 書籍 - カタログ上の1冊
///
/// 貸出中かどうかは`available`フラグのみで表す（貸出記録は持たない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl Book {
    /// 新しい書籍を登録する（貸出可能な状態で作成される）
    pub fn new(isbn: Isbn, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// 貸出中の状態にする
    pub fn checked_out(self) -> Self {
        Self {
            available: false,
            ..self
        }
    }
}
