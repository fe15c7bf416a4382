mod circulation_service;
mod errors;
mod overdue_notification;

pub use circulation_service::{
    CirculationPolicy, ServiceDependencies, borrow_book, return_book, search_available_books,
};
pub use errors::{
    BorrowOutcome, BorrowRejection, CirculationError, Result, ReturnOutcome, ReturnRejection,
};
pub use overdue_notification::send_overdue_notifications;
