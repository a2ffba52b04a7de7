use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{Ad, NewAd, YearCount};
use crate::repository::AdRepository;

#[derive(Clone)]
pub struct PgAdRepository {
    pool: PgPool,
}

impl PgAdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Ad>> {
        Ok(sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_for_year(&self, year: i32) -> Result<Vec<Ad>> {
        Ok(sqlx::query_as::<_, Ad>(
            "SELECT * FROM ads WHERE year = $1 ORDER BY updated_at DESC",
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_all(&self) -> Result<Vec<Ad>> {
        Ok(
            sqlx::query_as::<_, Ad>("SELECT * FROM ads ORDER BY year ASC, updated_at DESC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn year_counts(&self) -> Result<Vec<YearCount>> {
        Ok(sqlx::query_as::<_, YearCount>(
            "SELECT year, COUNT(*) AS count FROM ads GROUP BY year ORDER BY year ASC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create(&self, ad: &NewAd) -> Result<Ad> {
        let row = sqlx::query_as::<_, Ad>(
            r#"
            INSERT INTO ads (id, sponsor, sponsor_url, img_url, size, orient, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&ad.sponsor)
        .bind(&ad.sponsor_url)
        .bind(&ad.img_url)
        .bind(ad.size.code())
        .bind(ad.orient.code())
        .bind(ad.year)
        .fetch_one(&self.pool)
        .await?;

        info!("Created ad {} ({}) for {}", row.id, row.sponsor, row.year);
        Ok(row)
    }

    async fn update(&self, id: Uuid, ad: &NewAd) -> Result<Option<Ad>> {
        Ok(sqlx::query_as::<_, Ad>(
            r#"
            UPDATE ads
            SET sponsor = $2, sponsor_url = $3, img_url = $4, size = $5,
                orient = $6, year = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&ad.sponsor)
        .bind(&ad.sponsor_url)
        .bind(&ad.img_url)
        .bind(ad.size.code())
        .bind(ad.orient.code())
        .bind(ad.year)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
