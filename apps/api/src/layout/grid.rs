//! Grid cell hints for the wall's CSS grid.
//!
//! The main area is a two-column grid with fixed row height. Large ads span
//! two cells, mediums one, smalls flow in the sidebar and get no span.

use serde::Serialize;

use crate::models::{Ad, AdSize, Orient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridSpan {
    /// 2 cols × 2 rows, 1 col on wide viewports.
    LargePortrait,
    /// 2 cols × 1 row, 2 rows on wide viewports.
    LargeLandscape,
    /// 1 × 1.
    Single,
    /// No explicit span.
    Sidebar,
}

impl GridSpan {
    /// Anything not marked portrait is laid out as landscape.
    pub fn of(size: i32, orient: &str) -> Self {
        match AdSize::from_code(size) {
            Some(AdSize::Large) if Orient::from_code(orient) == Some(Orient::Portrait) => {
                GridSpan::LargePortrait
            }
            Some(AdSize::Large) => GridSpan::LargeLandscape,
            Some(AdSize::Medium) => GridSpan::Single,
            _ => GridSpan::Sidebar,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            GridSpan::LargePortrait => "col-span-2 row-span-2 sm:col-span-1",
            GridSpan::LargeLandscape => "col-span-2 row-span-1 sm:row-span-2",
            GridSpan::Single => "col-span-1 row-span-1",
            GridSpan::Sidebar => "",
        }
    }
}

/// Grid placement classes for an ad's cell.
pub fn grid_hint(ad: &Ad) -> &'static str {
    GridSpan::of(ad.size, &ad.orient).css_class()
}

/// Sizing classes for the `<img>` inside an ad's cell.
pub fn image_class(ad: &Ad) -> &'static str {
    let portrait = Orient::from_code(&ad.orient) == Some(Orient::Portrait);
    match (AdSize::from_code(ad.size), portrait) {
        (Some(AdSize::Large), true) => "mx-auto max-w-full max-h-full",
        (Some(AdSize::Large), false) => "mx-auto h-full",
        (Some(AdSize::Medium), true) => "mx-auto max-w-full max-h-[100px] sm:max-h-full",
        (Some(AdSize::Medium), false) => "mx-auto max-h-full",
        _ => "mx-auto",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ad::fixtures::ad;

    #[test]
    fn test_hint_table() {
        assert_eq!(grid_hint(&ad(3, "p")), "col-span-2 row-span-2 sm:col-span-1");
        assert_eq!(grid_hint(&ad(3, "l")), "col-span-2 row-span-1 sm:row-span-2");
        assert_eq!(grid_hint(&ad(2, "p")), "col-span-1 row-span-1");
        assert_eq!(grid_hint(&ad(2, "l")), "col-span-1 row-span-1");
        assert_eq!(grid_hint(&ad(1, "p")), "");
        assert_eq!(grid_hint(&ad(1, "l")), "");
    }

    #[test]
    fn test_hint_is_pure() {
        let a = ad(3, "p");
        let mut b = ad(3, "p");
        b.sponsor = "Someone else".to_string();
        assert_eq!(grid_hint(&a), grid_hint(&b));
        assert_eq!(grid_hint(&a), grid_hint(&a));
    }

    #[test]
    fn test_unknown_size_gets_no_span() {
        assert_eq!(GridSpan::of(0, "p"), GridSpan::Sidebar);
        assert_eq!(GridSpan::of(5, "l"), GridSpan::Sidebar);
    }

    #[test]
    fn test_image_class() {
        assert_eq!(image_class(&ad(3, "p")), "mx-auto max-w-full max-h-full");
        assert_eq!(image_class(&ad(3, "l")), "mx-auto h-full");
        assert_eq!(
            image_class(&ad(2, "p")),
            "mx-auto max-w-full max-h-[100px] sm:max-h-full"
        );
        assert_eq!(image_class(&ad(2, "l")), "mx-auto max-h-full");
        assert_eq!(image_class(&ad(1, "l")), "mx-auto");
    }
}
