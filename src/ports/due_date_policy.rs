use crate::domain::User;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 返却期限ポリシーポート
///
/// 利用者ごとに延滞している書籍のタイトルを求める。
/// 延滞通知バッチから利用者1人につき1回呼ばれる。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DueDatePolicy: Send + Sync {
    /// 延滞中の書籍タイトルを返す
    ///
    /// 空のリストを返した利用者には通知を送らない。
    async fn overdue_titles(&self, user: &User) -> Result<Vec<String>>;
}
