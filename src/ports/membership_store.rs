use crate::domain::{User, UserId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員ストアポート
///
/// 利用者の検索と保存、延滞者の抽出を抽象化する。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// IDで利用者を取得する
    ///
    /// 存在しない場合は`None`を返す。
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>>;

    /// 利用者を保存する（新規・更新どちらも）
    async fn save(&self, user: &User) -> Result<()>;

    /// 延滞中の貸出を持つ利用者の一覧を取得する
    ///
    /// 何をもって延滞とするかはストア側の責務。
    /// 返された順序のまま通知に使われる。
    async fn find_users_with_overdue(&self) -> Result<Vec<User>>;
}
