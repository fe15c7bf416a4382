/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 貸出上限に達している
    BorrowLimitReached,
    /// 書籍が貸出中
    BookUnavailable,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 書籍は既に貸出可能（貸出されていない）
    AlreadyAvailable,
    /// 利用者の貸出冊数が0のまま返却しようとした（データ不整合）
    CountUnderflow,
}
