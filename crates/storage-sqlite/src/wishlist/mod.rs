//! SQLite storage implementation for the wishlist.

mod model;
mod repository;

pub use model::{NewWishlistItemDB, WishlistItemDB};
pub use repository::WishlistRepository;
