use crate::application::circulation::{
    BorrowOutcome, ReturnOutcome, ServiceDependencies, borrow_book as execute_borrow_book,
    return_book as execute_return_book, search_available_books, send_overdue_notifications,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        BookResponse, CirculationRequest, CirculationResponse, ErrorResponse,
        OverdueNotificationResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /loans - 書籍を貸し出す
///
/// ルール違反の場合は422と理由コードを返す。
pub async fn borrow_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CirculationRequest>,
) -> Result<Response, ApiError> {
    let outcome = execute_borrow_book(&state.service_deps, &req.user_id, &req.isbn).await?;

    Ok(match outcome {
        BorrowOutcome::Borrowed => success_response(),
        BorrowOutcome::Rejected(reason) => rejection_response(reason.code(), reason.to_string()),
    })
}

/// POST /returns - 書籍を返却する
///
/// ルール違反の場合は422と理由コードを返す。
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CirculationRequest>,
) -> Result<Response, ApiError> {
    let outcome = execute_return_book(&state.service_deps, &req.user_id, &req.isbn).await?;

    Ok(match outcome {
        ReturnOutcome::Returned => success_response(),
        ReturnOutcome::Rejected(reason) => rejection_response(reason.code(), reason.to_string()),
    })
}

/// POST /notifications/overdue - 延滞通知バッチを実行する
pub async fn send_overdue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OverdueNotificationResponse>, ApiError> {
    let notified = send_overdue_notifications(&state.service_deps).await?;
    Ok(Json(OverdueNotificationResponse { notified }))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/available - 貸出可能な書籍の一覧
pub async fn list_available_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = search_available_books(&state.service_deps).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

// ============================================================================
// Helpers
// ============================================================================

fn success_response() -> Response {
    (StatusCode::OK, Json(CirculationResponse { success: true })).into_response()
}

/// 422 Unprocessable Entity - ビジネスルール違反
fn rejection_response(code: &'static str, message: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::new(code, message)),
    )
        .into_response()
}
