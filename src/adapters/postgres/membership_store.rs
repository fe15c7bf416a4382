use crate::domain::{BorrowedCount, User, UserId};
use crate::ports::membership_store::{MembershipStore as MembershipStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをUserに変換する
///
/// borrowed_countのi32からu32への変換でエラーハンドリングを行う。
fn map_row_to_user(row: &PgRow) -> Result<User> {
    let borrowed_count_i32: i32 = row.get("borrowed_count");
    let borrowed_count: u32 = borrowed_count_i32.try_into().map_err(|_| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("borrowed_count out of range: {}", borrowed_count_i32),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(User {
        user_id: UserId::new(row.get::<String, _>("user_id")),
        name: row.get("name"),
        email: row.get("email"),
        borrowed_count: BorrowedCount::from(borrowed_count),
    })
}

/// MembershipStoreのPostgreSQL実装
///
/// usersテーブルに利用者を保存する。
/// 延滞の判定はhas_overdue_itemsフラグで行い、フラグは外部のバッチが更新する。
pub struct MembershipStore {
    pool: PgPool,
}

impl MembershipStore {
    /// PostgreSQLコネクションプールから新しいMembershipStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipStoreTrait for MembershipStore {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, name, email, borrowed_count
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_user).transpose()
    }

    /// 利用者を保存（upsert）
    ///
    /// has_overdue_itemsは更新しない。
    async fn save(&self, user: &User) -> Result<()> {
        let borrowed_count: i32 = user.borrowed_count.value().try_into()?;

        sqlx::query(
            r#"
            INSERT INTO users (user_id, name, email, borrowed_count, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                borrowed_count = EXCLUDED.borrowed_count,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.user_id.value())
        .bind(&user.name)
        .bind(&user.email)
        .bind(borrowed_count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// 延滞者をuser_id順に取得
    async fn find_users_with_overdue(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, name, email, borrowed_count
            FROM users
            WHERE has_overdue_items = TRUE
            ORDER BY user_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_user).collect()
    }
}
