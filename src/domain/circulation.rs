use super::{Book, BorrowBookError, BorrowLimit, ReturnBookError, User};

/// 純粋関数：利用者がもう1冊借りられるか確認する
///
/// 書籍を引く前に判定するため、貸出本体とは分けている。
pub fn ensure_can_borrow(user: &User, limit: BorrowLimit) -> Result<(), BorrowBookError> {
    if user.can_borrow_more(limit) {
        Ok(())
    } else {
        Err(BorrowBookError::BorrowLimitReached)
    }
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 利用者の貸出冊数が上限未満であること
/// - 書籍が貸出可能であること
///
/// 副作用なし。更新後の利用者と書籍を返す。
pub fn borrow_book(
    user: User,
    book: Book,
    limit: BorrowLimit,
) -> Result<(User, Book), BorrowBookError> {
    let borrowed_count = user
        .borrowed_count
        .increment(limit)
        .map_err(|_| BorrowBookError::BorrowLimitReached)?;

    if !book.available {
        return Err(BorrowBookError::BookUnavailable);
    }

    Ok((
        User {
            borrowed_count,
            ..user
        },
        book.checked_out(),
    ))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 貸出可能な書籍（貸出されていない書籍）は返却できない
/// - 貸出冊数は0未満にならない
///
/// 副作用なし。更新後の利用者と書籍を返す。
pub fn return_book(user: User, book: Book) -> Result<(User, Book), ReturnBookError> {
    if book.available {
        return Err(ReturnBookError::AlreadyAvailable);
    }

    let borrowed_count = user
        .borrowed_count
        .decrement()
        .map_err(|_| ReturnBookError::CountUnderflow)?;

    Ok((
        User {
            borrowed_count,
            ..user
        },
        Book {
            available: true,
            ..book
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Isbn, UserId};
    use rstest::rstest;

    fn user_with(count: u32) -> User {
        User::new(UserId::from("U001"), "Alice Johnson", "alice@example.com")
            .with_borrowed_count(count)
    }

    fn available_book() -> Book {
        Book::new(Isbn::from("978-1234567890"), "Test Book", "Test Author")
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(2, 3)]
    fn test_borrow_book_increments_count(#[case] before: u32, #[case] after: u32) {
        let (user, book) =
            borrow_book(user_with(before), available_book(), BorrowLimit::DEFAULT).unwrap();

        assert_eq!(user.borrowed_count.value(), after);
        assert!(!book.available);
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    fn test_borrow_book_rejects_at_or_over_limit(#[case] count: u32) {
        let result = borrow_book(user_with(count), available_book(), BorrowLimit::DEFAULT);
        assert_eq!(result, Err(BorrowBookError::BorrowLimitReached));
    }

    #[test]
    fn test_borrow_book_checks_limit_before_availability() {
        let result = borrow_book(
            user_with(3),
            available_book().checked_out(),
            BorrowLimit::DEFAULT,
        );
        assert_eq!(result, Err(BorrowBookError::BorrowLimitReached));
    }

    #[test]
    fn test_borrow_book_rejects_unavailable_book() {
        let result = borrow_book(
            user_with(0),
            available_book().checked_out(),
            BorrowLimit::DEFAULT,
        );
        assert_eq!(result, Err(BorrowBookError::BookUnavailable));
    }

    #[test]
    fn test_borrow_book_keeps_identity_fields() {
        let (user, book) =
            borrow_book(user_with(1), available_book(), BorrowLimit::DEFAULT).unwrap();

        assert_eq!(user.user_id, UserId::from("U001"));
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(book.isbn, Isbn::from("978-1234567890"));
        assert_eq!(book.title, "Test Book");
    }

    #[test]
    fn test_return_book_success() {
        let (user, book) = return_book(user_with(2), available_book().checked_out()).unwrap();

        assert_eq!(user.borrowed_count.value(), 1);
        assert!(book.available);
    }

    #[test]
    fn test_return_book_rejects_available_book() {
        let result = return_book(user_with(2), available_book());
        assert_eq!(result, Err(ReturnBookError::AlreadyAvailable));
    }

    #[test]
    fn test_return_book_rejects_count_underflow() {
        let result = return_book(user_with(0), available_book().checked_out());
        assert_eq!(result, Err(ReturnBookError::CountUnderflow));
    }

    #[test]
    fn test_ensure_can_borrow() {
        assert!(ensure_can_borrow(&user_with(2), BorrowLimit::DEFAULT).is_ok());
        assert_eq!(
            ensure_can_borrow(&user_with(3), BorrowLimit::DEFAULT),
            Err(BorrowBookError::BorrowLimitReached)
        );
    }
}
