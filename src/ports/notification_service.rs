use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 利用者への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 貸出確認通知を送信する
    async fn send_borrow_confirmation(&self, email: &str, book_title: &str) -> Result<()>;

    /// 返却確認通知を送信する
    async fn send_return_confirmation(&self, email: &str, book_title: &str) -> Result<()>;

    /// 延滞通知を送信する
    ///
    /// 延滞中の書籍タイトルをまとめて1通で送る。
    async fn send_overdue_notification(
        &self,
        email: &str,
        user_name: &str,
        overdue_titles: &[String],
    ) -> Result<()>;
}
