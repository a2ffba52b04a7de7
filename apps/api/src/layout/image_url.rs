use crate::models::{Ad, AdSize, Orient};

/// Path marker after which the image host accepts transform parameters.
pub const UPLOAD_MARKER: &str = "upload/";

/// Transform segment for an ad: fit inside a box, auto format, plus a
/// width or height cap that depends on the bucket.
pub fn transform_params(size: i32, orient: &str) -> String {
    let landscape = Orient::from_code(orient) == Some(Orient::Landscape);
    let cap = match AdSize::from_code(size) {
        Some(AdSize::Small) => ",w_250,h_250",
        Some(AdSize::Medium) if landscape => ",w_400",
        Some(AdSize::Medium) => ",h_380",
        Some(AdSize::Large) if landscape => ",w_800",
        Some(AdSize::Large) => ",h_760",
        None => "",
    };
    format!("c_fit,f_auto{cap}")
}

/// Display-optimised image URL for an ad.
///
/// Returns `img_url` unchanged unless it contains exactly one upload marker.
pub fn display_url(ad: &Ad) -> String {
    let Some((prefix, suffix)) = ad.img_url.split_once(UPLOAD_MARKER) else {
        return ad.img_url.clone();
    };
    if suffix.contains(UPLOAD_MARKER) {
        return ad.img_url.clone();
    }
    format!(
        "{prefix}{UPLOAD_MARKER}{}/{suffix}",
        transform_params(ad.size, &ad.orient)
    )
}
