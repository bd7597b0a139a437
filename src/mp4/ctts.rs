use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

#[derive(Debug, Clone, PartialEq)]
pub struct CompositionOffsetEntry {
    pub sample_count: u32,
    pub sample_offset: u32,
}

/// Composition offset box (ctts): decode-to-composition time deltas.
/// Optional, and forbidden on sound tracks.
#[derive(Debug, Clone)]
pub struct CompositionOffsetBox {
    pub entries: Vec<CompositionOffsetEntry>,
}

impl CompositionOffsetBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count as u64 * 8 > r.remaining() {
            return Err(Mp4Error::truncated(format!(
                "ctts declares {} entries but only {} bytes remain",
                entry_count,
                r.remaining()
            )));
        }
        let mut entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            entries.push(CompositionOffsetEntry {
                sample_count: r.read_u32()?,
                sample_offset: r.read_u32()?,
            });
        }
        Ok(CompositionOffsetBox { entries })
    }
}
