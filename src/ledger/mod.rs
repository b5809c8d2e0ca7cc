pub mod store;

pub use store::{LedgerStore, CURRENT_SCHEMA_VERSION};
