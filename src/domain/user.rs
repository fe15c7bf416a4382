use serde::{Deserialize, Serialize};

use super::{BorrowLimit, BorrowedCount, UserId};

/// 利用者 - 図書館の会員
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub borrowed_count: BorrowedCount,
}

impl User {
    /// 新しい利用者を登録する（貸出冊数0で作成される）
    pub fn new(user_id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            borrowed_count: BorrowedCount::new(),
        }
    }

    /// 貸出冊数を指定して作成する（永続化層からの復元、テスト用）
    pub fn with_borrowed_count(self, count: u32) -> Self {
        Self {
            borrowed_count: BorrowedCount::from(count),
            ..self
        }
    }

    /// 上限に達していなければtrue
    pub fn can_borrow_more(&self, limit: BorrowLimit) -> bool {
        self.borrowed_count.can_borrow_more(limit)
    }
}
