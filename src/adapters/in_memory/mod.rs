pub mod catalog_store;
pub mod due_date_policy;
pub mod membership_store;
pub mod notification_service;
pub mod sample_data;

pub use catalog_store::CatalogStore;
pub use due_date_policy::FixedTitlesPolicy;
pub use membership_store::MembershipStore;
pub use notification_service::{NotificationKind, NotificationService, SentNotification};
pub use sample_data::load_sample_data;
