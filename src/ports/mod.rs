pub mod catalog_store;
pub mod due_date_policy;
pub mod membership_store;
pub mod notification_service;

pub use catalog_store::CatalogStore;
pub use due_date_policy::DueDatePolicy;
pub use membership_store::MembershipStore;
pub use notification_service::NotificationService;

#[cfg(test)]
pub use catalog_store::MockCatalogStore;
#[cfg(test)]
pub use due_date_policy::MockDueDatePolicy;
#[cfg(test)]
pub use membership_store::MockMembershipStore;
#[cfg(test)]
pub use notification_service::MockNotificationService;
