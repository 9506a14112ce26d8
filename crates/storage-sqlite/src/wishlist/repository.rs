use tripfolio_core::wishlist::{NewWishlistItem, WishlistItem, WishlistRepositoryTrait};
use tripfolio_core::Result;

use super::model::{NewWishlistItemDB, WishlistItemDB};
use crate::db::DbExecutor;
use crate::errors::IntoCore;
use crate::schema::wishlist;
use crate::schema::wishlist::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct WishlistRepository {
    executor: DbExecutor,
}

impl WishlistRepository {
    pub fn new(executor: DbExecutor) -> Self {
        WishlistRepository { executor }
    }
}

#[async_trait]
impl WishlistRepositoryTrait for WishlistRepository {
    async fn get_items(&self) -> Result<Vec<WishlistItem>> {
        self.executor
            .exec(|conn: &mut SqliteConnection| -> Result<Vec<WishlistItem>> {
                let items_db = wishlist
                    .order((priority.desc(), id.asc()))
                    .select(WishlistItemDB::as_select())
                    .load::<WishlistItemDB>(conn)
                    .into_core()?;
                Ok(items_db.into_iter().map(WishlistItem::from).collect())
            })
            .await
    }

    async fn create_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem> {
        self.executor
            .exec(move |conn: &mut SqliteConnection| -> Result<WishlistItem> {
                let new_item_db: NewWishlistItemDB = new_item.into();
                let result_db = diesel::insert_into(wishlist::table)
                    .values(&new_item_db)
                    .returning(WishlistItemDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(WishlistItem::from(result_db))
            })
            .await
    }

    async fn mark_purchased(&self, item_id: i64) -> Result<usize> {
        self.executor
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::update(wishlist.find(item_id))
                    .set(purchased.eq(true))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
