use crate::domain::{self, Book, BorrowLimit, Isbn, ReturnBookError, UserId};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{
    BorrowOutcome, BorrowRejection, CirculationError, Result, ReturnOutcome, ReturnRejection,
};

/// 貸出ルールの設定値
///
/// 起動時に決まり、サービスの実行中は変わらない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CirculationPolicy {
    pub borrow_limit: BorrowLimit,
}

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
/// ストアと通知サービスの所有者は呼び出し側で、サービスはキャッシュもロックもしない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog_store: Arc<dyn CatalogStore>,
    pub membership_store: Arc<dyn MembershipStore>,
    pub notification_service: Arc<dyn NotificationService>,
    pub due_date_policy: Arc<dyn DueDatePolicy>,
    pub policy: CirculationPolicy,
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 利用者が存在すること
/// - 利用者の貸出冊数が上限（既定3冊）未満であること
/// - 書籍が存在し、貸出可能であること
///
/// 利用者の確認に失敗した場合、書籍は検索しない。
/// 保存は書籍、利用者の順に行い、その後に貸出確認通知を送る。
///
/// # 一貫性保証
///
/// 書籍と利用者の保存はトランザクションで囲まれていない。
/// 書籍の保存後に利用者の保存が失敗しても、書籍は貸出中のまま残る（補償処理なし）。
/// 同じ書籍への同時貸出は両方成功しうるため、呼び出し側で直列化すること。
///
/// # 戻り値
/// 貸出できた場合は`BorrowOutcome::Borrowed`、ルール違反は`BorrowOutcome::Rejected`
///
/// # エラー
/// ストア・通知サービスのエラーはそのまま返す
pub async fn borrow_book(
    deps: &ServiceDependencies,
    user_id: &UserId,
    isbn: &Isbn,
) -> Result<BorrowOutcome> {
    // 1. 利用者の確認
    let user = match deps
        .membership_store
        .find_by_id(user_id)
        .await
        .map_err(CirculationError::MembershipStoreError)?
    {
        Some(user) => user,
        None => return Ok(reject_borrow(user_id, isbn, BorrowRejection::UserNotFound)),
    };

    if domain::circulation::ensure_can_borrow(&user, deps.policy.borrow_limit).is_err() {
        return Ok(reject_borrow(
            user_id,
            isbn,
            BorrowRejection::BorrowLimitReached,
        ));
    }

    // 2. 書籍の確認
    let book = match deps
        .catalog_store
        .find_by_isbn(isbn)
        .await
        .map_err(CirculationError::CatalogStoreError)?
    {
        Some(book) => book,
        None => return Ok(reject_borrow(user_id, isbn, BorrowRejection::BookNotFound)),
    };

    // 3. ドメイン層の純粋関数を呼び出し
    let (user, book) = match domain::circulation::borrow_book(user, book, deps.policy.borrow_limit)
    {
        Ok(updated) => updated,
        Err(e) => return Ok(reject_borrow(user_id, isbn, e.into())),
    };

    // 4. 書籍、利用者の順に保存
    deps.catalog_store
        .save(&book)
        .await
        .map_err(CirculationError::CatalogStoreError)?;
    deps.membership_store
        .save(&user)
        .await
        .map_err(CirculationError::MembershipStoreError)?;

    // 5. 貸出確認通知
    deps.notification_service
        .send_borrow_confirmation(&user.email, &book.title)
        .await
        .map_err(CirculationError::NotificationError)?;

    tracing::info!(
        user_id = %user.user_id,
        isbn = %book.isbn,
        borrowed_count = user.borrowed_count.value(),
        "Book borrowed"
    );

    Ok(BorrowOutcome::Borrowed)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 利用者と書籍が存在すること
/// - 書籍が貸出中であること（貸出可能な書籍の返却は受け付けない。2回目の返却は失敗する）
///
/// 利用者と書籍の検索は、結果にかかわらず両方とも行う。
///
/// # 一貫性保証
///
/// 保存の扱いは`borrow_book()`と同じ。
///
/// # エラー
/// - ストア・通知サービスのエラーはそのまま返す
/// - 貸出冊数0の利用者からの返却は`InconsistentState`（保存・通知は行わない）
pub async fn return_book(
    deps: &ServiceDependencies,
    user_id: &UserId,
    isbn: &Isbn,
) -> Result<ReturnOutcome> {
    // 1. 利用者と書籍を検索
    let user = deps
        .membership_store
        .find_by_id(user_id)
        .await
        .map_err(CirculationError::MembershipStoreError)?;
    let book = deps
        .catalog_store
        .find_by_isbn(isbn)
        .await
        .map_err(CirculationError::CatalogStoreError)?;

    // 2. 存在確認
    let (user, book) = match (user, book) {
        (None, _) => return Ok(reject_return(user_id, isbn, ReturnRejection::UserNotFound)),
        (Some(_), None) => {
            return Ok(reject_return(user_id, isbn, ReturnRejection::BookNotFound));
        }
        (Some(user), Some(book)) => (user, book),
    };

    // 3. ドメイン層の純粋関数を呼び出し
    let (user, book) = match domain::circulation::return_book(user, book) {
        Ok(updated) => updated,
        Err(ReturnBookError::AlreadyAvailable) => {
            return Ok(reject_return(
                user_id,
                isbn,
                ReturnRejection::BookAlreadyAvailable,
            ));
        }
        Err(ReturnBookError::CountUnderflow) => {
            tracing::error!(%user_id, %isbn, "Return from user with no borrowed books");
            return Err(CirculationError::InconsistentState(format!(
                "user {} has no borrowed books but book {} is on loan",
                user_id, isbn
            )));
        }
    };

    // 4. 書籍、利用者の順に保存
    deps.catalog_store
        .save(&book)
        .await
        .map_err(CirculationError::CatalogStoreError)?;
    deps.membership_store
        .save(&user)
        .await
        .map_err(CirculationError::MembershipStoreError)?;

    // 5. 返却確認通知
    deps.notification_service
        .send_return_confirmation(&user.email, &book.title)
        .await
        .map_err(CirculationError::NotificationError)?;

    tracing::info!(
        user_id = %user.user_id,
        isbn = %book.isbn,
        borrowed_count = user.borrowed_count.value(),
        "Book returned"
    );

    Ok(ReturnOutcome::Returned)
}

/// 貸出可能な書籍の一覧を取得する
pub async fn search_available_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.catalog_store
        .find_available()
        .await
        .map_err(CirculationError::CatalogStoreError)
}

fn reject_borrow(user_id: &UserId, isbn: &Isbn, reason: BorrowRejection) -> BorrowOutcome {
    tracing::debug!(%user_id, %isbn, %reason, "Borrow rejected");
    BorrowOutcome::Rejected(reason)
}

fn reject_return(user_id: &UserId, isbn: &Isbn, reason: ReturnRejection) -> ReturnOutcome {
    tracing::debug!(%user_id, %isbn, %reason, "Return rejected");
    ReturnOutcome::Rejected(reason)
}
