use crate::ports::notification_service::{
    NotificationService as NotificationServiceTrait, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

/// 通知の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    BorrowConfirmation { book_title: String },
    ReturnConfirmation { book_title: String },
    Overdue { user_name: String, overdue_titles: Vec<String> },
}

/// 送信済みの通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub email: String,
    pub kind: NotificationKind,
    pub sent_at: DateTime<Utc>,
}

/// NotificationServiceのインメモリ実装
///
/// 実際には配信せず、送信内容をログに出して記録する。
/// 記録は`sent()`で送信順に取り出せる。
/// 記録は削除されないため、テスト専用。サーバーでは`LoggingNotificationService`を使う。
pub struct NotificationService {
    sent: Mutex<Vec<SentNotification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// 送信済みの通知（送信順）
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, email: &str, kind: NotificationKind) {
        tracing::info!(email, ?kind, "Notification sent");
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentNotification {
                email: email.to_string(),
                kind,
                sent_at: Utc::now(),
            });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn send_borrow_confirmation(&self, email: &str, book_title: &str) -> Result<()> {
        self.record(
            email,
            NotificationKind::BorrowConfirmation {
                book_title: book_title.to_string(),
            },
        );
        Ok(())
    }

    async fn send_return_confirmation(&self, email: &str, book_title: &str) -> Result<()> {
        self.record(
            email,
            NotificationKind::ReturnConfirmation {
                book_title: book_title.to_string(),
            },
        );
        Ok(())
    }

    async fn send_overdue_notification(
        &self,
        email: &str,
        user_name: &str,
        overdue_titles: &[String],
    ) -> Result<()> {
        self.record(
            email,
            NotificationKind::Overdue {
                user_name: user_name.to_string(),
                overdue_titles: overdue_titles.to_vec(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notifications_are_recorded_in_order() {
        let service = NotificationService::new();
        service
            .send_borrow_confirmation("a@example.com", "First")
            .await
            .unwrap();
        service
            .send_return_confirmation("b@example.com", "Second")
            .await
            .unwrap();

        let sent = service.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].email, "a@example.com");
        assert_eq!(
            sent[1].kind,
            NotificationKind::ReturnConfirmation {
                book_title: "Second".to_string()
            }
        );
    }
}
