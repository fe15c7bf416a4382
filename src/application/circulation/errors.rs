use crate::domain::BorrowBookError;
use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
///
/// バリデーションの失敗（利用者が存在しない等）はここには含めない。
/// それらは`BorrowOutcome`/`ReturnOutcome`の`Rejected`として返す。
#[derive(Debug, Error)]
pub enum CirculationError {
    /// 永続化済みの状態が不整合（例: 貸出冊数0の利用者からの返却）
    #[error("Inconsistent state: {0}")]
    InconsistentState(String),

    /// CatalogStoreのエラー
    #[error("Catalog store error")]
    CatalogStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MembershipStoreのエラー
    #[error("Membership store error")]
    MembershipStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// NotificationServiceのエラー
    #[error("Notification service error")]
    NotificationError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// DueDatePolicyのエラー
    #[error("Due date policy error")]
    DueDatePolicyError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CirculationError>;

/// 貸出が受け付けられなかった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BorrowRejection {
    #[error("User not found")]
    UserNotFound,
    #[error("Borrow limit reached")]
    BorrowLimitReached,
    #[error("Book not found")]
    BookNotFound,
    #[error("Book is not available")]
    BookUnavailable,
}

impl BorrowRejection {
    /// APIで返すエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            BorrowRejection::UserNotFound => "USER_NOT_FOUND",
            BorrowRejection::BorrowLimitReached => "BORROW_LIMIT_REACHED",
            BorrowRejection::BookNotFound => "BOOK_NOT_FOUND",
            BorrowRejection::BookUnavailable => "BOOK_UNAVAILABLE",
        }
    }
}

impl From<BorrowBookError> for BorrowRejection {
    fn from(error: BorrowBookError) -> Self {
        match error {
            BorrowBookError::BorrowLimitReached => BorrowRejection::BorrowLimitReached,
            BorrowBookError::BookUnavailable => BorrowRejection::BookUnavailable,
        }
    }
}

/// 返却が受け付けられなかった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReturnRejection {
    #[error("User not found")]
    UserNotFound,
    #[error("Book not found")]
    BookNotFound,
    #[error("Book is already available")]
    BookAlreadyAvailable,
}

impl ReturnRejection {
    /// APIで返すエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            ReturnRejection::UserNotFound => "USER_NOT_FOUND",
            ReturnRejection::BookNotFound => "BOOK_NOT_FOUND",
            ReturnRejection::BookAlreadyAvailable => "BOOK_ALREADY_AVAILABLE",
        }
    }
}

/// 貸出の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    Rejected(BorrowRejection),
}

impl BorrowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed)
    }
}

/// 返却の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    Rejected(ReturnRejection),
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnOutcome::Returned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BorrowBookError::BorrowLimitReached, BorrowRejection::BorrowLimitReached)]
    #[case(BorrowBookError::BookUnavailable, BorrowRejection::BookUnavailable)]
    fn test_domain_borrow_error_maps_to_rejection(
        #[case] error: BorrowBookError,
        #[case] expected: BorrowRejection,
    ) {
        assert_eq!(BorrowRejection::from(error), expected);
    }
}
