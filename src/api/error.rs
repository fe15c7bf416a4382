use crate::application::circulation::CirculationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// ルール違反（貸出上限など）はエラーではないため、ここには来ない。
#[derive(Debug)]
pub struct ApiError(CirculationError);

impl From<CirculationError> for ApiError {
    fn from(err: CirculationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 409 Conflict - 保存済みデータの不整合
            CirculationError::InconsistentState(ref msg) => {
                tracing::error!("Inconsistent state: {}", msg);
                (
                    StatusCode::CONFLICT,
                    "INCONSISTENT_STATE",
                    "Stored circulation state is inconsistent",
                )
            }

            // 500 Internal Server Error - 外部サービスの障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            CirculationError::CatalogStoreError(ref e) => {
                tracing::error!("Catalog store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_STORE_ERROR",
                    "Catalog store error",
                )
            }
            CirculationError::MembershipStoreError(ref e) => {
                tracing::error!("Membership store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEMBERSHIP_STORE_ERROR",
                    "Membership store error",
                )
            }
            CirculationError::NotificationError(ref e) => {
                tracing::error!("Notification error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFICATION_ERROR",
                    "Failed to send notification",
                )
            }
            CirculationError::DueDatePolicyError(ref e) => {
                tracing::error!("Due date policy error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DUE_DATE_POLICY_ERROR",
                    "Failed to determine overdue books",
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
