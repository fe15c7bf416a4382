use crate::domain::User;
use crate::ports::due_date_policy::{DueDatePolicy, Result};
use async_trait::async_trait;

/// 返却期限を見ずに固定のタイトルを返すポリシー
///
/// 貸出履歴を持たない構成での暫定実装。
/// 延滞者と判定された利用者全員に同じタイトル一覧を返す。
pub struct FixedTitlesPolicy {
    titles: Vec<String>,
}

impl FixedTitlesPolicy {
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles }
    }
}

impl Default for FixedTitlesPolicy {
    fn default() -> Self {
        Self::new(vec![
            "Sample Overdue Book 1".to_string(),
            "Sample Overdue Book 2".to_string(),
        ])
    }
}

#[async_trait]
impl DueDatePolicy for FixedTitlesPolicy {
    async fn overdue_titles(&self, _user: &User) -> Result<Vec<String>> {
        Ok(self.titles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    #[tokio::test]
    async fn test_default_policy_returns_two_sample_titles() {
        let user = User::new(UserId::from("U001"), "David Miller", "david@example.com");
        let titles = FixedTitlesPolicy::default()
            .overdue_titles(&user)
            .await
            .unwrap();

        assert_eq!(
            titles,
            vec!["Sample Overdue Book 1", "Sample Overdue Book 2"]
        );
    }
}
