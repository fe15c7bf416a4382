use super::circulation_service::ServiceDependencies;
use super::errors::{CirculationError, Result};

/// 延滞通知バッチ
///
/// 延滞中の貸出を持つ利用者に、延滞している書籍のタイトルをまとめて通知する。
///
/// 処理フロー：
/// 1. 会員ストアから延滞者の一覧を取得（ストアが返した順序のまま）
/// 2. 各利用者について：
///    - 返却期限ポリシーから延滞タイトルを取得
///    - タイトルが1件以上あれば延滞通知を送信
///    - タイトルが空なら何もしない
/// 3. 送信した通知の件数を返す
///
/// 利用者は1人ずつ順番に処理し、前の通知が完了してから次に進む。
/// ストア・ポリシー・通知サービスのいずれかが失敗した時点で中断し、
/// 残りの利用者には通知しない（再試行なし）。
///
/// # 戻り値
/// 送信した延滞通知の件数
pub async fn send_overdue_notifications(deps: &ServiceDependencies) -> Result<usize> {
    // 1. 延滞者の一覧を取得
    let users = deps
        .membership_store
        .find_users_with_overdue()
        .await
        .map_err(CirculationError::MembershipStoreError)?;

    let mut sent_count = 0;

    // 2. 各利用者に通知
    for (index, user) in users.iter().enumerate() {
        let titles = deps
            .due_date_policy
            .overdue_titles(user)
            .await
            .map_err(CirculationError::DueDatePolicyError)?;

        if titles.is_empty() {
            continue;
        }

        if let Err(e) = deps
            .notification_service
            .send_overdue_notification(&user.email, &user.name, &titles)
            .await
        {
            tracing::warn!(
                user_id = %user.user_id,
                sent_count,
                remaining = remaining_after(users.len(), index),
                "Overdue notification failed, aborting batch"
            );
            return Err(CirculationError::NotificationError(e));
        }

        sent_count += 1;
    }

    tracing::info!(
        overdue_users = users.len(),
        sent_count,
        "Overdue notifications sent"
    );

    Ok(sent_count)
}

/// 失敗した利用者より後ろの、未処理の利用者数
fn remaining_after(total: usize, failed_index: usize) -> usize {
    total.saturating_sub(failed_index + 1)
}
