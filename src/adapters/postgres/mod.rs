pub mod catalog_store;
pub mod membership_store;

// パブリックに型を再エクスポート
pub use catalog_store::CatalogStore as PostgresCatalogStore;
pub use membership_store::MembershipStore as PostgresMembershipStore;
