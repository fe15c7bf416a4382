use crate::domain::{User, UserId};
use crate::ports::membership_store::{MembershipStore as MembershipStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// MembershipStoreのインメモリ実装
///
/// 延滞者は`mark_overdue`で登録した順に返す。
pub struct MembershipStore {
    users: Mutex<HashMap<UserId, User>>,
    overdue_users: Mutex<Vec<UserId>>,
}

impl MembershipStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            overdue_users: Mutex::new(Vec::new()),
        }
    }

    /// 利用者を登録（既存の場合は上書き）
    pub fn add_user(&self, user: User) {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.user_id.clone(), user);
    }

    /// 利用者を延滞者として登録
    pub fn mark_overdue(&self, user_id: UserId) {
        let mut overdue = self
            .overdue_users
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !overdue.contains(&user_id) {
            overdue.push(user_id);
        }
    }
}

impl Default for MembershipStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MembershipStoreTrait for MembershipStore {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>> {
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(users.get(user_id).cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.add_user(user.clone());
        Ok(())
    }

    /// 登録順に延滞者を返す（未登録の利用者IDは飛ばす）
    async fn find_users_with_overdue(&self) -> Result<Vec<User>> {
        let overdue = self
            .overdue_users
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(overdue
            .iter()
            .filter_map(|id| users.get(id).cloned())
            .collect())
    }
}
