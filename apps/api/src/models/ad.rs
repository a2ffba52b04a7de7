use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A sponsor advertisement as stored in the `ads` table.
///
/// `size` and `orient` are kept exactly as stored. The layout engine
/// classifies them via [`AdSize::from_code`] and [`Orient::from_code`] and
/// skips anything it cannot classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Ad {
    pub id: Uuid,
    pub sponsor: String,
    pub sponsor_url: String,
    pub img_url: String,
    pub size: i32,
    pub orient: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ad {
    pub fn ad_size(&self) -> Option<AdSize> {
        AdSize::from_code(self.size)
    }

    pub fn orientation(&self) -> Option<Orient> {
        Orient::from_code(&self.orient)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdSize {
    Small,
    Medium,
    Large,
}

impl AdSize {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(AdSize::Small),
            2 => Some(AdSize::Medium),
            3 => Some(AdSize::Large),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            AdSize::Small => 1,
            AdSize::Medium => 2,
            AdSize::Large => 3,
        }
    }

    /// Label used by the admin listing. Unknown codes read as "small".
    pub fn label_for(code: i32) -> &'static str {
        match AdSize::from_code(code) {
            Some(AdSize::Large) => "large",
            Some(AdSize::Medium) => "medium",
            _ => "small",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orient {
    Landscape,
    Portrait,
}

impl Orient {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "l" => Some(Orient::Landscape),
            "p" => Some(Orient::Portrait),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Orient::Landscape => "l",
            Orient::Portrait => "p",
        }
    }
}

/// Validated field set for inserting or updating an ad.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAd {
    pub sponsor: String,
    pub sponsor_url: String,
    pub img_url: String,
    pub size: AdSize,
    pub orient: Orient,
    pub year: i32,
}

impl NewAd {
    /// Copy of a stored ad moved into the following fundraiser year.
    pub fn next_year_of(ad: &Ad) -> Option<Self> {
        Some(NewAd {
            sponsor: ad.sponsor.clone(),
            sponsor_url: ad.sponsor_url.clone(),
            img_url: ad.img_url.clone(),
            size: ad.ad_size()?,
            orient: ad.orientation()?,
            year: ad.year + 1,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct YearCount {
    pub year: i32,
    pub count: i64,
}
