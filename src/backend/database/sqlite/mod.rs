//! SQLite storage adapter

pub mod backend_impl;
pub mod product_impl;
pub mod schema;
pub mod user_impl;

pub use backend_impl::SqliteBackend;
pub use product_impl::SqliteProductStore;
pub use user_impl::SqliteUserStore;
