use serde::{Deserialize, Serialize};

use crate::domain::{Book, Isbn, UserId};

/// 貸出・返却リクエスト（POST /loans と POST /returns）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CirculationRequest {
    pub user_id: UserId,
    pub isbn: Isbn,
}

/// 貸出・返却の成功レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct CirculationResponse {
    pub success: bool,
}

/// 書籍レスポンス（GET /books/available）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn.value().to_string(),
            title: book.title,
            author: book.author,
            available: book.available,
        }
    }
}

/// 延滞通知バッチのレスポンス（POST /notifications/overdue）
#[derive(Debug, Serialize, Deserialize)]
pub struct OverdueNotificationResponse {
    pub notified: usize,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
