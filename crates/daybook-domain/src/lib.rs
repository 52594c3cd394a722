//! daybook-domain
//!
//! Pure record types for daybook (reminders, shopping list, expense periods,
//! savings goals, investments, loans) plus the persisted snapshot document.
//! No I/O, no storage. Only data types and derived fields.

pub mod common;
pub mod expense;
pub mod investment;
pub mod loan;
pub mod reminder;
pub mod savings;
pub mod shopping;
pub mod snapshot;

pub use common::*;
pub use expense::*;
pub use investment::*;
pub use loan::*;
pub use reminder::*;
pub use savings::*;
pub use shopping::*;
pub use snapshot::*;
