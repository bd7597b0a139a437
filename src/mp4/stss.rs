use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Sync sample box (stss): 1-based numbers of the samples that are random
/// access points. Required on video tracks, forbidden on sound tracks.
#[derive(Debug, Clone)]
pub struct SyncSampleBox {
    pub sample_numbers: Vec<u32>,
}

impl SyncSampleBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count as u64 * 4 > r.remaining() {
            return Err(Mp4Error::truncated(format!(
                "stss declares {} entries but only {} bytes remain",
                entry_count,
                r.remaining()
            )));
        }
        let mut sample_numbers = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            sample_numbers.push(r.read_u32()?);
        }
        Ok(SyncSampleBox { sample_numbers })
    }
}
