use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleToChunkEntry {
    /// 1-based index of the first chunk this run applies to.
    pub first_chunk: u32,
    pub samples_per_chunk: u32,
    pub sample_description_index: u32,
}

/// Sample-to-chunk box (stsc): runs of chunks sharing a samples-per-chunk
/// count, ordered by ascending first_chunk.
#[derive(Debug, Clone)]
pub struct SampleToChunkBox {
    pub entries: Vec<SampleToChunkEntry>,
}

impl SampleToChunkBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count as u64 * 12 > r.remaining() {
            return Err(Mp4Error::truncated(format!(
                "stsc declares {} entries but only {} bytes remain",
                entry_count,
                r.remaining()
            )));
        }
        let mut entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            entries.push(SampleToChunkEntry {
                first_chunk: r.read_u32()?,
                samples_per_chunk: r.read_u32()?,
                sample_description_index: r.read_u32()?,
            });
        }
        Ok(SampleToChunkBox { entries })
    }
}
