//! Ad storage: the only path from handlers to persisted ads.
//!
//! `AppState` holds an `Arc<dyn AdRepository>`. Production uses
//! [`PgAdRepository`]; tests use the in-memory store.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Ad, NewAd, YearCount};

pub use postgres::PgAdRepository;

#[async_trait]
pub trait AdRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Ad>>;

    /// All ads for one year, most recently updated first.
    async fn list_for_year(&self, year: i32) -> Result<Vec<Ad>>;

    async fn list_all(&self) -> Result<Vec<Ad>>;

    /// One row per year that has ads, ascending by year.
    async fn year_counts(&self) -> Result<Vec<YearCount>>;

    async fn create(&self, ad: &NewAd) -> Result<Ad>;

    /// Returns `None` if no ad has this id.
    async fn update(&self, id: Uuid, ad: &NewAd) -> Result<Option<Ad>>;

    /// Number of rows removed (0 or 1).
    async fn delete(&self, id: Uuid) -> Result<u64>;
}
