//! Sponsor wall. Turns one year's ads into the sidebar and grid the public
//! page renders.

pub mod handlers;

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use crate::layout::{display_url, grid_hint, image_class, interleave, layout};
use crate::models::Ad;

/// One rendered ad cell.
#[derive(Debug, Clone, Serialize)]
pub struct WallCell {
    pub id: Uuid,
    pub sponsor: String,
    pub href: Option<String>,
    pub image_url: String,
    pub grid_hint: &'static str,
    pub image_class: &'static str,
    pub size: i32,
    pub orient: String,
}

impl WallCell {
    pub fn from_ad(ad: &Ad) -> Self {
        WallCell {
            id: ad.id,
            sponsor: ad.sponsor.clone(),
            href: sponsor_href(&ad.sponsor_url),
            image_url: display_url(ad),
            grid_hint: grid_hint(ad),
            image_class: image_class(ad),
            size: ad.size,
            orient: ad.orient.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Wall {
    pub year: i32,
    pub sidebar: Vec<WallCell>,
    pub grid: Vec<WallCell>,
    pub dropped_mediums: usize,
    pub excluded: usize,
}

/// Link target for a sponsor. Bare hosts get an `http://` scheme.
pub fn sponsor_href(sponsor_url: &str) -> Option<String> {
    let url = sponsor_url.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else {
        Some(format!("http://{url}"))
    }
}

pub fn build_wall<R: Rng + ?Sized>(year: i32, ads: &[Ad], rng: &mut R) -> Wall {
    let split = layout(ads, rng);
    let grid = interleave(&split.large, &split.medium);

    Wall {
        year,
        sidebar: split.small.iter().map(WallCell::from_ad).collect(),
        grid: grid.cells.into_iter().map(WallCell::from_ad).collect(),
        dropped_mediums: grid.dropped_mediums,
        excluded: split.excluded,
    }
}
