use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{Ad, NewAd, YearCount};
use crate::repository::AdRepository;

/// Vec-backed store for handler tests.
#[derive(Default)]
pub struct InMemoryAdRepository {
    ads: Mutex<Vec<Ad>>,
}

impl InMemoryAdRepository {
    pub fn with_ads(ads: Vec<Ad>) -> Self {
        Self {
            ads: Mutex::new(ads),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Ad>>> {
        self.ads.lock().map_err(|_| anyhow!("ad store lock poisoned"))
    }
}

#[async_trait]
impl AdRepository for InMemoryAdRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Ad>> {
        Ok(self.lock()?.iter().find(|a| a.id == id).cloned())
    }

    async fn list_for_year(&self, year: i32) -> Result<Vec<Ad>> {
        let mut ads: Vec<Ad> = self
            .lock()?
            .iter()
            .filter(|a| a.year == year)
            .cloned()
            .collect();
        ads.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(ads)
    }

    async fn list_all(&self) -> Result<Vec<Ad>> {
        let mut ads = self.lock()?.clone();
        ads.sort_by(|a, b| a.year.cmp(&b.year).then(b.updated_at.cmp(&a.updated_at)));
        Ok(ads)
    }

    async fn year_counts(&self) -> Result<Vec<YearCount>> {
        let mut counts: BTreeMap<i32, i64> = BTreeMap::new();
        for ad in self.lock()?.iter() {
            *counts.entry(ad.year).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect())
    }

    async fn create(&self, ad: &NewAd) -> Result<Ad> {
        let now = Utc::now();
        let row = Ad {
            id: Uuid::new_v4(),
            sponsor: ad.sponsor.clone(),
            sponsor_url: ad.sponsor_url.clone(),
            img_url: ad.img_url.clone(),
            size: ad.size.code(),
            orient: ad.orient.code().to_string(),
            year: ad.year,
            created_at: now,
            updated_at: now,
        };
        self.lock()?.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, ad: &NewAd) -> Result<Option<Ad>> {
        let mut ads = self.lock()?;
        let Some(row) = ads.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        row.sponsor = ad.sponsor.clone();
        row.sponsor_url = ad.sponsor_url.clone();
        row.img_url = ad.img_url.clone();
        row.size = ad.size.code();
        row.orient = ad.orient.code().to_string();
        row.year = ad.year;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let mut ads = self.lock()?;
        let before = ads.len();
        ads.retain(|a| a.id != id);
        Ok((before - ads.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ad::fixtures::ad;
    use crate::models::{AdSize, Orient};

    fn new_ad(year: i32) -> NewAd {
        NewAd {
            sponsor: "Hill Country Feed".to_string(),
            sponsor_url: String::new(),
            img_url: "https://host/image/upload/x.jpg".to_string(),
            size: AdSize::Large,
            orient: Orient::Landscape,
            year,
        }
    }

    #[tokio::test]
    async fn test_year_counts_ascending() {
        let mut a = ad(1, "l");
        a.year = 2023;
        let mut b = ad(2, "l");
        b.year = 2021;
        let c = ad(3, "p");
        let repo = InMemoryAdRepository::with_ads(vec![a, b, c.clone(), c]);
        let counts = repo.year_counts().await.unwrap();
        assert_eq!(
            counts,
            vec![
                YearCount { year: 2021, count: 1 },
                YearCount { year: 2023, count: 1 },
                YearCount { year: 2024, count: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let repo = InMemoryAdRepository::default();
        let created = repo.create(&new_ad(2024)).await.unwrap();
        assert_eq!(created.size, 3);
        assert_eq!(created.orient, "l");

        let updated = repo
            .update(created.id, &new_ad(2025))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.year, 2025);
        assert!(repo.list_for_year(2024).await.unwrap().is_empty());

        assert_eq!(repo.delete(created.id).await.unwrap(), 1);
        assert_eq!(repo.delete(created.id).await.unwrap(), 0);
        assert!(repo.get(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_none() {
        let repo = InMemoryAdRepository::default();
        assert!(repo
            .update(Uuid::new_v4(), &new_ad(2024))
            .await
            .unwrap()
            .is_none());
    }
}
