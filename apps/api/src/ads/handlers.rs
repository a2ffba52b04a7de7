use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ads::validation::{validate_ad_input, AdInput};
use crate::auth::AdminUser;
use crate::errors::AppError;
use crate::layout::display_url;
use crate::models::{Ad, AdSize, NewAd};
use crate::state::AppState;

/// Multipart field carrying the image file.
const UPLOAD_FIELD: &str = "img";

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct AdListItem {
    /// 1-based position within its year, as shown in the admin list.
    pub position: usize,
    pub id: Uuid,
    pub sponsor: String,
    pub sponsor_url: String,
    pub size_label: &'static str,
    pub thumbnail_url: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct YearGroup {
    pub year: i32,
    pub ads: Vec<AdListItem>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub img_url: String,
}

/// Groups ads by year, ascending, keeping each year's incoming order.
pub fn group_by_year(ads: Vec<Ad>) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();
    let mut sorted = ads;
    sorted.sort_by_key(|ad| ad.year);

    for ad in sorted {
        let item = |position| AdListItem {
            position,
            id: ad.id,
            sponsor: ad.sponsor.clone(),
            sponsor_url: ad.sponsor_url.clone(),
            size_label: AdSize::label_for(ad.size),
            thumbnail_url: display_url(&ad),
            updated_at: ad.updated_at,
        };
        match groups.last_mut() {
            Some(group) if group.year == ad.year => {
                let position = group.ads.len() + 1;
                group.ads.push(item(position));
            }
            _ => groups.push(YearGroup {
                year: ad.year,
                ads: vec![item(1)],
            }),
        }
    }
    groups
}

/// GET /api/v1/ads
pub async fn handle_list_ads(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> Result<Json<Vec<YearGroup>>, AppError> {
    let ads = match params.year {
        Some(year) => state.ads.list_for_year(year).await?,
        None => state.ads.list_all().await?,
    };
    Ok(Json(group_by_year(ads)))
}

/// GET /api/v1/ads/:id
pub async fn handle_get_ad(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ad>, AppError> {
    let ad = state
        .ads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad {id} not found")))?;
    Ok(Json(ad))
}

/// POST /api/v1/ads
pub async fn handle_create_ad(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(input): Json<AdInput>,
) -> Result<(StatusCode, Json<Ad>), AppError> {
    let new_ad = validate_ad_input(input)?;
    let ad = state.ads.create(&new_ad).await?;
    Ok((StatusCode::CREATED, Json(ad)))
}

/// PUT /api/v1/ads/:id
pub async fn handle_update_ad(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AdInput>,
) -> Result<Json<Ad>, AppError> {
    let new_ad = validate_ad_input(input)?;
    let ad = state
        .ads
        .update(id, &new_ad)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad {id} not found")))?;
    info!("Updated ad {id}");
    Ok(Json(ad))
}

/// POST /api/v1/ads/:id/clone
/// Copies an ad into the following year so sponsors can be renewed.
pub async fn handle_clone_ad(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<Ad>), AppError> {
    let source = state
        .ads
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad {id} not found")))?;
    let copy = NewAd::next_year_of(&source).ok_or_else(|| {
        AppError::Validation(format!("Ad {id} has an unknown size or orientation"))
    })?;
    let ad = state.ads.create(&copy).await?;
    info!("Cloned ad {id} into {} as {}", ad.year, ad.id);
    Ok((StatusCode::CREATED, Json(ad)))
}

/// DELETE /api/v1/ads/:id
/// Deleting an ad that is already gone still succeeds.
pub async fn handle_delete_ad(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state.ads.delete(id).await?;
    info!("Deleted ad {id} ({removed} row(s))");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/uploads
/// Multipart form with an `img` file field. Returns the hosted image URL to
/// put in the ad's `img_url`.
pub async fn handle_upload(
    _admin: AdminUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        if data.is_empty() {
            break;
        }

        let img_url = state.images.upload(&file_name, data).await?;
        info!("Uploaded image {file_name} to {img_url}");
        return Ok(Json(UploadResponse { img_url }));
    }

    Err(AppError::InvalidField {
        field: "img",
        message: "An image file is required",
    })
}
