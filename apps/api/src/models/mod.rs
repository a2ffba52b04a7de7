pub mod ad;

pub use ad::{Ad, AdSize, NewAd, Orient, YearCount};
