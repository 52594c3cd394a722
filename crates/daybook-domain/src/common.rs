//! Shared traits for records held in the snapshot.

use uuid::Uuid;

/// Exposes the stable identifier every persisted record carries.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to a record's user-facing title.
pub trait Titled {
    fn title(&self) -> &str;
}

/// Converts a record into a display label for lists and logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
