//! Size buckets. Splits one year's ads into small / medium / large.
//!
//! Each bucket is an independent filter over the same immutable snapshot, so
//! bucket membership never depends on the order the buckets are computed in.

use rand::Rng;

use crate::layout::shuffle::shuffle;
use crate::models::{Ad, AdSize};

/// The three display buckets for a year, plus how many ads fit none of them.
#[derive(Debug, Clone)]
pub struct SplitAds {
    pub small: Vec<Ad>,
    pub medium: Vec<Ad>,
    pub large: Vec<Ad>,
    pub excluded: usize,
}

impl SplitAds {
    pub fn placed(&self) -> usize {
        self.small.len() + self.medium.len() + self.large.len()
    }
}

/// Bucket an ad belongs to, or `None` if its size is unknown or its
/// orientation is blank. Any other orientation value still places the ad.
pub fn bucket_of(ad: &Ad) -> Option<AdSize> {
    if ad.orient.trim().is_empty() {
        return None;
    }
    ad.ad_size()
}

/// Ads of one size, in input order.
pub fn filter_bucket(ads: &[Ad], size: AdSize) -> Vec<Ad> {
    ads.iter()
        .filter(|ad| bucket_of(ad) == Some(size))
        .cloned()
        .collect()
}

/// Stable partition of `ads` into buckets. No shuffling.
pub fn partition(ads: &[Ad]) -> SplitAds {
    let small = filter_bucket(ads, AdSize::Small);
    let medium = filter_bucket(ads, AdSize::Medium);
    let large = filter_bucket(ads, AdSize::Large);
    let excluded = ads.len() - small.len() - medium.len() - large.len();

    SplitAds {
        small,
        medium,
        large,
        excluded,
    }
}

/// Partitions `ads` and shuffles every bucket independently.
pub fn layout<R: Rng + ?Sized>(ads: &[Ad], rng: &mut R) -> SplitAds {
    let mut split = partition(ads);
    shuffle(&mut split.small, rng);
    shuffle(&mut split.medium, rng);
    shuffle(&mut split.large, rng);

    if split.excluded > 0 {
        tracing::debug!(
            "Layout placed {} ad(s), skipped {} with unknown size or blank orientation",
            split.placed(),
            split.excluded
        );
    }
    split
}
