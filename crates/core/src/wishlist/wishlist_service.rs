use log::{debug, info};
use std::sync::Arc;

use super::wishlist_model::{NewWishlistItem, WishlistItem};
use super::wishlist_traits::{WishlistRepositoryTrait, WishlistServiceTrait};
use crate::errors::{Error, Result};
use crate::validation::ValidationMode;
use async_trait::async_trait;

pub struct WishlistService<T: WishlistRepositoryTrait> {
    wishlist_repo: Arc<T>,
    validation: ValidationMode,
}

impl<T: WishlistRepositoryTrait> WishlistService<T> {
    pub fn new(wishlist_repo: Arc<T>, validation: ValidationMode) -> Self {
        WishlistService {
            wishlist_repo,
            validation,
        }
    }
}

#[async_trait]
impl<T: WishlistRepositoryTrait + Send + Sync> WishlistServiceTrait for WishlistService<T> {
    async fn get_items(&self) -> Result<Vec<WishlistItem>> {
        self.wishlist_repo.get_items().await
    }

    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem> {
        if self.validation.is_strict() {
            new_item.validate()?;
        }
        let item = self.wishlist_repo.create_item(new_item).await?;
        info!("Created wishlist item {} ({})", item.id, item.name);
        Ok(item)
    }

    async fn purchase_item(&self, item_id: i64) -> Result<()> {
        let matched = self.wishlist_repo.mark_purchased(item_id).await?;
        if matched == 0 {
            debug!("Purchase requested for unknown wishlist item {}", item_id);
            return Err(Error::NotFound("Item not found".to_string()));
        }
        info!("Wishlist item {} marked as purchased", item_id);
        Ok(())
    }
}
