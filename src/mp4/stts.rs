use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeToSampleEntry {
    pub sample_count: u32,
    pub sample_delta: u32,
}

/// Time-to-sample box (stts): runs of samples sharing a decode delta.
#[derive(Debug, Clone)]
pub struct TimeToSampleBox {
    pub entries: Vec<TimeToSampleEntry>,
}

impl TimeToSampleBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count as u64 * 8 > r.remaining() {
            return Err(Mp4Error::truncated(format!(
                "stts declares {} entries but only {} bytes remain",
                entry_count,
                r.remaining()
            )));
        }
        let mut entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            entries.push(TimeToSampleEntry {
                sample_count: r.read_u32()?,
                sample_delta: r.read_u32()?,
            });
        }
        Ok(TimeToSampleBox { entries })
    }
}
