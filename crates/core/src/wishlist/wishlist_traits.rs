use super::wishlist_model::{NewWishlistItem, WishlistItem};
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for wishlist repository operations.
#[async_trait]
pub trait WishlistRepositoryTrait: Send + Sync {
    /// All items ordered by priority descending, then id ascending.
    async fn get_items(&self) -> Result<Vec<WishlistItem>>;
    /// Inserts a row with `purchased = false` and returns it with its new id.
    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem>;
    /// Sets `purchased = true`, returning the number of rows matched.
    async fn mark_purchased(&self, item_id: i64) -> Result<usize>;
}

/// Trait defining the contract for wishlist service operations.
#[async_trait]
pub trait WishlistServiceTrait: Send + Sync {
    async fn get_items(&self) -> Result<Vec<WishlistItem>>;
    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem>;
    async fn purchase_item(&self, item_id: i64) -> Result<()>;
}
