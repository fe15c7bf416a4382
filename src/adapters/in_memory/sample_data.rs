use super::{CatalogStore, MembershipStore};
use crate::domain::{Book, Isbn, User, UserId};

/// 開発用サーバーのサンプルデータを登録する
///
/// 書籍4冊（うち1冊は貸出中）と利用者3人を登録し、U003を延滞者にする。
pub fn load_sample_data(catalog_store: &CatalogStore, membership_store: &MembershipStore) {
    let books = [
        Book::new(
            Isbn::from("978-0134685991"),
            "Effective Java",
            "Joshua Bloch",
        ),
        Book::new(
            Isbn::from("978-1593278281"),
            "The Rust Programming Language",
            "Steve Klabnik",
        ),
        Book::new(
            Isbn::from("978-0321125217"),
            "Domain-Driven Design",
            "Eric Evans",
        ),
        Book::new(Isbn::from("978-0132350884"), "Clean Code", "Robert C. Martin").checked_out(),
    ];
    for book in books {
        catalog_store.add_book(book);
    }

    let users = [
        User::new(UserId::from("U001"), "David Miller", "david@example.com"),
        User::new(UserId::from("U002"), "Emma Davis", "emma@example.com"),
        User::new(UserId::from("U003"), "Frank Wilson", "frank@example.com").with_borrowed_count(1),
    ];
    for user in users {
        membership_store.add_user(user);
    }
    membership_store.mark_overdue(UserId::from("U003"));

    tracing::info!(books = 4, users = 3, "Loaded in-memory sample data");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CatalogStore as _, MembershipStore as _};

    #[tokio::test]
    async fn test_sample_data_is_usable() {
        let catalog_store = CatalogStore::new();
        let membership_store = MembershipStore::new();

        load_sample_data(&catalog_store, &membership_store);

        let available = catalog_store.find_available().await.unwrap();
        assert_eq!(available.len(), 3);

        let user = membership_store
            .find_by_id(&UserId::from("U001"))
            .await
            .unwrap()
            .unwrap();
        assert!(user.can_borrow_more(Default::default()));

        let overdue = membership_store.find_users_with_overdue().await.unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].user_id, UserId::from("U003"));
    }
}
