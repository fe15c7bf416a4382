use serde::{Deserialize, Serialize};
use std::fmt;

/// ISBN - カタログ上の書籍の識別子
///
/// 形式の検証は行わない。不正な値は「存在しない書籍」として扱われる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Isbn {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 利用者ID - 会員管理上の利用者の識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 利用者1人あたりの最大貸出冊数（既定値）
pub const MAX_BOOKS: u32 = 3;

/// 貸出上限
///
/// 同時に借りられる冊数の上限。起動時に決まり、以後変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowLimit(u32);

impl BorrowLimit {
    pub const DEFAULT: Self = Self(MAX_BOOKS);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for BorrowLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 貸出冊数エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// 貸出上限に達している
    #[error("borrow limit of {limit} reached")]
    LimitReached { limit: u32 },
    /// 0冊から減らそうとした
    #[error("borrowed count cannot go below zero")]
    Underflow,
}

/// 貸出中の冊数
///
/// 不変条件：0 <= 冊数。上限は`increment`で確認する。
/// 永続化済みの値が上限を超えていても読み込みは拒否しない（貸出時に弾かれる）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BorrowedCount(u32);

impl BorrowedCount {
    /// 新規作成（0冊）
    pub fn new() -> Self {
        Self(0)
    }

    /// 現在の冊数
    pub fn value(&self) -> u32 {
        self.0
    }

    /// まだ借りられるか
    pub fn can_borrow_more(&self, limit: BorrowLimit) -> bool {
        self.0 < limit.value()
    }

    /// 冊数を1増やす
    ///
    /// # エラー
    /// 既に上限に達している場合は`CountError::LimitReached`を返す
    pub fn increment(self, limit: BorrowLimit) -> Result<Self, CountError> {
        if !self.can_borrow_more(limit) {
            return Err(CountError::LimitReached {
                limit: limit.value(),
            });
        }
        Ok(Self(self.0 + 1))
    }

    /// 冊数を1減らす
    ///
    /// # エラー
    /// 0冊の場合は`CountError::Underflow`を返す
    pub fn decrement(self) -> Result<Self, CountError> {
        self.0.checked_sub(1).map(Self).ok_or(CountError::Underflow)
    }
}

impl Default for BorrowedCount {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u32> for BorrowedCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
