pub mod extractor;
pub mod locator;

pub use extractor::extract_all_tracks;
pub use locator::{locate_samples, SampleLocation};
