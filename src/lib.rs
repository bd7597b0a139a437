//! Parser and sample extractor for ISO Base Media (MP4) files.
//!
//! The box tree is read in a single forward pass over a seekable stream
//! with strict per-box byte accounting: every box reader knows its
//! declared size, and over- or under-consumption is an error rather
//! than a silent resync. On top of the tree sit a metadata report, a
//! sample locator that walks the chunked sample tables, and an
//! extractor that writes each sample to its own file.

pub mod bits;
pub mod errors;
pub mod metadata;
pub mod mp4;
pub mod samples;
pub mod streams;

pub use errors::{Mp4Error, Mp4Result};
pub use metadata::{build_report, MovieReport};
pub use mp4::file::Mp4File;
pub use samples::{extract_all_tracks, locate_samples, SampleLocation};
pub use streams::seekable_stream::{LocalSeekableStream, SeekableStream};

use std::path::Path;

/// Open and parse a local MP4 file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Mp4Result<Mp4File> {
    Mp4File::open(path)
}
