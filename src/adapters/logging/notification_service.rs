use crate::ports::notification_service::{NotificationService, Result};
use async_trait::async_trait;

/// ログ出力のみを行うNotificationService
///
/// 実際の配信は行わず、送信内容を`tracing`に出して成功を返す。
/// 状態を持たないため、長時間稼働しても送信件数に応じてメモリが増えない。
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotificationService;

impl LoggingNotificationService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationService for LoggingNotificationService {
    async fn send_borrow_confirmation(&self, email: &str, book_title: &str) -> Result<()> {
        tracing::info!(email, book_title, "Borrow confirmation sent");
        Ok(())
    }

    async fn send_return_confirmation(&self, email: &str, book_title: &str) -> Result<()> {
        tracing::info!(email, book_title, "Return confirmation sent");
        Ok(())
    }

    async fn send_overdue_notification(
        &self,
        email: &str,
        user_name: &str,
        overdue_titles: &[String],
    ) -> Result<()> {
        tracing::info!(email, user_name, ?overdue_titles, "Overdue notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_holds_no_state() {
        assert_eq!(std::mem::size_of::<LoggingNotificationService>(), 0);
    }

    #[tokio::test]
    async fn test_repeated_sends_succeed() {
        let notifier = LoggingNotificationService::new();
        let titles = vec!["Sample Overdue Book 1".to_string()];

        for _ in 0..10_000 {
            notifier
                .send_borrow_confirmation("a@example.com", "Test Book")
                .await
                .unwrap();
        }
        notifier
            .send_return_confirmation("a@example.com", "Test Book")
            .await
            .unwrap();
        notifier
            .send_overdue_notification("a@example.com", "Alice Johnson", &titles)
            .await
            .unwrap();
    }
}
