use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, borrow_book, list_available_books, return_book, send_overdue};

/// Creates the API router with all circulation endpoints
///
/// Command endpoints (Write operations):
/// - POST /loans - Borrow a book
/// - POST /returns - Return a book
/// - POST /notifications/overdue - Run the overdue notification batch
///
/// Query endpoints (Read operations):
/// - GET /books/available - List books available for loan
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/loans", post(borrow_book))
        .route("/returns", post(return_book))
        .route("/notifications/overdue", post(send_overdue))
        // Query endpoints (Read operations)
        .route("/books/available", get(list_available_books))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
