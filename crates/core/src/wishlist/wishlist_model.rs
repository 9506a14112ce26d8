//! Wishlist domain models.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::{require_amount, require_non_negative, require_text};

/// Priority given to items created without one.
pub const DEFAULT_PRIORITY: i64 = 1;

/// Domain model representing something to buy on the trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Higher value sorts first.
    pub priority: i64,
    pub purchased: bool,
}

/// Input model for creating a new wishlist item
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewWishlistItem {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

impl NewWishlistItem {
    /// Checks applied in strict validation mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_amount("price", self.price)?;
        require_non_negative("priority", self.priority)?;
        Ok(())
    }
}
