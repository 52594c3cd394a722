//! Domain type for shopping-list items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A wishlist/shopping entry. Archived items stay in the snapshot but are
/// hidden from the active list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub quantity: u32,
    pub is_completed: bool,
    pub is_archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_date: Option<DateTime<Utc>>,
    pub added_date: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
            notes: None,
            price: None,
            quantity: 1,
            is_completed: false,
            is_archived: false,
            archived_date: None,
            added_date: Utc::now(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the quantity, keeping the minimum of one.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// Line total when a price is known.
    pub fn total_price(&self) -> Option<f64> {
        self.price.map(|price| price * self.quantity as f64)
    }
}

impl Identifiable for ShoppingItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Titled for ShoppingItem {
    fn title(&self) -> &str {
        &self.title
    }
}
