use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{AdSize, NewAd, Orient};

/// Create/edit request body. Every field is optional on the wire so a missing
/// field is reported by name rather than as a deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdInput {
    pub sponsor: Option<String>,
    pub sponsor_url: Option<String>,
    pub img_url: Option<String>,
    pub size: Option<i32>,
    pub orient: Option<String>,
    pub year: Option<i32>,
}

fn invalid(field: &'static str, message: &'static str) -> AppError {
    AppError::InvalidField { field, message }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks fields in form order and reports the first problem.
pub fn validate_ad_input(input: AdInput) -> Result<NewAd, AppError> {
    let sponsor = non_blank(input.sponsor).ok_or_else(|| invalid("sponsor", "Sponsor is required"))?;

    let size = input.size.ok_or_else(|| invalid("size", "Size is required"))?;
    let size = AdSize::from_code(size).ok_or_else(|| invalid("size", "Size must be 1, 2 or 3"))?;

    let orient = non_blank(input.orient).ok_or_else(|| invalid("orient", "Orientation is required"))?;
    let orient = Orient::from_code(&orient)
        .ok_or_else(|| invalid("orient", "Orientation must be 'l' or 'p'"))?;

    let img_url = non_blank(input.img_url).ok_or_else(|| invalid("img_url", "Image URL is required"))?;

    let year = input.year.ok_or_else(|| invalid("year", "Year is required"))?;

    Ok(NewAd {
        sponsor,
        sponsor_url: non_blank(input.sponsor_url).unwrap_or_default(),
        img_url,
        size,
        orient,
        year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AdInput {
        AdInput {
            sponsor: Some("Kerrville Hardware".to_string()),
            sponsor_url: Some("kerrvillehardware.com".to_string()),
            img_url: Some("https://res.cloudinary.com/x/image/upload/v1/a.jpg".to_string()),
            size: Some(2),
            orient: Some("p".to_string()),
            year: Some(2024),
        }
    }

    fn field_of(err: AppError) -> &'static str {
        match err {
            AppError::InvalidField { field, .. } => field,
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_input_passes() {
        let ad = validate_ad_input(complete()).unwrap();
        assert_eq!(ad.size, AdSize::Medium);
        assert_eq!(ad.orient, Orient::Portrait);
        assert_eq!(ad.sponsor_url, "kerrvillehardware.com");
    }

    #[test]
    fn test_missing_sponsor_url_defaults_to_empty() {
        let input = AdInput {
            sponsor_url: None,
            ..complete()
        };
        assert_eq!(validate_ad_input(input).unwrap().sponsor_url, "");
    }

    #[test]
    fn test_empty_input_reports_sponsor_first() {
        assert_eq!(field_of(validate_ad_input(AdInput::default()).unwrap_err()), "sponsor");
    }

    #[test]
    fn test_blank_sponsor_is_missing() {
        let input = AdInput {
            sponsor: Some("   ".to_string()),
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "sponsor");
    }

    #[test]
    fn test_field_order() {
        let input = AdInput {
            size: None,
            orient: None,
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "size");

        let input = AdInput {
            orient: None,
            img_url: None,
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "orient");

        let input = AdInput {
            img_url: None,
            year: None,
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "img_url");

        let input = AdInput {
            year: None,
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "year");
    }

    #[test]
    fn test_out_of_range_codes() {
        let input = AdInput {
            size: Some(4),
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "size");

        let input = AdInput {
            orient: Some("x".to_string()),
            ..complete()
        };
        assert_eq!(field_of(validate_ad_input(input).unwrap_err()), "orient");
    }
}
