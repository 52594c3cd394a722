//! daybook-core
//!
//! Business logic for daybook: the record store with write-through
//! persistence, aggregation helpers, and the collaborator contracts for
//! notifications and market quotes.
//! Depends on daybook-domain. No terminal I/O, no direct filesystem access.

pub mod error;
pub mod market;
pub mod notify;
pub mod storage;
pub mod store;
pub mod summary;

pub use error::CoreError;
pub use market::*;
pub use notify::*;
pub use storage::*;
pub use store::Store;
pub use summary::*;
