//! Database models for wishlist items.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for wishlist items
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::wishlist)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WishlistItemDB {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub priority: i64,
    pub purchased: bool,
}

/// Database model for creating a new wishlist item
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::wishlist)]
pub struct NewWishlistItemDB {
    pub name: String,
    pub price: f64,
    pub priority: i64,
    pub purchased: bool,
}

impl From<WishlistItemDB> for tripfolio_core::wishlist::WishlistItem {
    fn from(db: WishlistItemDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            price: db.price,
            priority: db.priority,
            purchased: db.purchased,
        }
    }
}

impl From<tripfolio_core::wishlist::NewWishlistItem> for NewWishlistItemDB {
    fn from(domain: tripfolio_core::wishlist::NewWishlistItem) -> Self {
        Self {
            name: domain.name,
            price: domain.price,
            priority: domain.priority,
            purchased: false,
        }
    }
}
