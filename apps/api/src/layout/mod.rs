// Ad layout engine: size buckets, per-bucket shuffle, large/medium interleave,
// grid hints and display image URLs.
// Pure and synchronous. Persistence and image hosting never reach in here.

pub mod buckets;
pub mod grid;
pub mod image_url;
pub mod interleave;
pub mod shuffle;

// Re-export the public API consumed by the wall and admin handlers.
pub use buckets::layout;
pub use grid::{grid_hint, image_class};
pub use image_url::display_url;
pub use interleave::interleave;
pub use shuffle::ShuffleMode;
