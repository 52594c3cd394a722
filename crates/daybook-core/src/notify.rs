//! Collaborator contract for local reminder alerts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Schedules and cancels local alerts on behalf of the store.
///
/// Delivery is best-effort: a scheduled alert may never fire, but a
/// cancelled reference must not. Implementations return an opaque reference
/// the store keeps on the reminder for later cancellation.
pub trait ReminderNotifier: Send + Sync {
    fn schedule(
        &self,
        reminder_id: Uuid,
        title: &str,
        body: &str,
        fire_at: DateTime<Utc>,
    ) -> String;
    fn cancel(&self, notification_ref: &str);
    fn cancel_all(&self);
}

impl<T: ReminderNotifier + ?Sized> ReminderNotifier for Arc<T> {
    fn schedule(
        &self,
        reminder_id: Uuid,
        title: &str,
        body: &str,
        fire_at: DateTime<Utc>,
    ) -> String {
        (**self).schedule(reminder_id, title, body, fire_at)
    }

    fn cancel(&self, notification_ref: &str) {
        (**self).cancel(notification_ref)
    }

    fn cancel_all(&self) {
        (**self).cancel_all()
    }
}

/// Notifier that drops every request. Used when alerts are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl ReminderNotifier for NullNotifier {
    fn schedule(
        &self,
        reminder_id: Uuid,
        _title: &str,
        _body: &str,
        fire_at: DateTime<Utc>,
    ) -> String {
        format!("{}-{}", reminder_id, fire_at.timestamp())
    }

    fn cancel(&self, _notification_ref: &str) {}

    fn cancel_all(&self) {}
}
