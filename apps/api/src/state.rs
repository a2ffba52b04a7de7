use std::sync::Arc;

use crate::config::Config;
use crate::images::ImageHost;
use crate::layout::ShuffleMode;
use crate::repository::AdRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub ads: Arc<dyn AdRepository>,
    pub images: Arc<dyn ImageHost>,
    pub config: Config,
    /// Seeded when `LAYOUT_SEED` is set, otherwise fresh per request.
    pub shuffle: ShuffleMode,
}
