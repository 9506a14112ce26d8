//! Wire models for the HTTP API, documented in the OpenAPI schema.

use serde::{Deserialize, Serialize};
use tripfolio_core::{activities as core_activities, summary as core_summary, wishlist as core_wishlist};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    /// Free-form timestamp text.
    pub start_time: String,
    pub duration: i64,
    pub cost: f64,
    pub location: String,
    pub notes: Option<String>,
    pub completed: bool,
}

impl From<core_activities::Activity> for Activity {
    fn from(a: core_activities::Activity) -> Self {
        Self {
            id: a.id,
            title: a.title,
            start_time: a.start_time,
            duration: a.duration,
            cost: a.cost,
            location: a.location,
            notes: a.notes,
            completed: a.completed,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewActivity {
    pub title: String,
    pub start_time: String,
    pub duration: i64,
    pub cost: f64,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<NewActivity> for core_activities::NewActivity {
    fn from(a: NewActivity) -> Self {
        Self {
            title: a.title,
            start_time: a.start_time,
            duration: a.duration,
            cost: a.cost,
            location: a.location,
            notes: a.notes,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub priority: i64,
    pub purchased: bool,
}

impl From<core_wishlist::WishlistItem> for WishlistItem {
    fn from(i: core_wishlist::WishlistItem) -> Self {
        Self {
            id: i.id,
            name: i.name,
            price: i.price,
            priority: i.priority,
            purchased: i.purchased,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct NewWishlistItem {
    pub name: String,
    pub price: f64,
    /// Defaults to 1. Higher sorts first.
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_priority() -> i64 {
    core_wishlist::DEFAULT_PRIORITY
}

impl From<NewWishlistItem> for core_wishlist::NewWishlistItem {
    fn from(i: NewWishlistItem) -> Self {
        Self {
            name: i.name,
            price: i.price,
            priority: i.priority,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq)]
pub struct FinancialSummary {
    pub total_budget: f64,
    pub spent_money: f64,
    pub remaining_budget: f64,
}

impl From<core_summary::FinancialSummary> for FinancialSummary {
    fn from(s: core_summary::FinancialSummary) -> Self {
        Self {
            total_budget: s.total_budget,
            spent_money: s.spent_money,
            remaining_budget: s.remaining_budget,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DatabaseSnapshot {
    pub tables: Vec<String>,
    pub activities: Vec<Activity>,
    pub wishlist: Vec<WishlistItem>,
}
