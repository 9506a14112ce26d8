//! Wishlist module - domain models, services, and traits.

mod wishlist_model;
mod wishlist_service;
mod wishlist_traits;

pub use wishlist_model::{NewWishlistItem, WishlistItem, DEFAULT_PRIORITY};
pub use wishlist_service::WishlistService;
pub use wishlist_traits::{WishlistRepositoryTrait, WishlistServiceTrait};
