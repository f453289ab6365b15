//! PostgreSQL storage adapter

pub mod backend_impl;
pub mod product_impl;
pub mod schema;
pub mod user_impl;

pub use backend_impl::PostgresBackend;
pub use product_impl::PostgresProductStore;
pub use user_impl::PostgresUserStore;
