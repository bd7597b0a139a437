use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Chunk offset box (stco): 32-bit absolute file offsets, widened to u64
/// so the locator can treat both offset tables uniformly.
#[derive(Debug, Clone)]
pub struct ChunkOffsetBox {
    pub chunk_offsets: Vec<u64>,
}

impl ChunkOffsetBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count as u64 * 4 > r.remaining() {
            return Err(Mp4Error::truncated(format!(
                "stco declares {} entries but only {} bytes remain",
                entry_count,
                r.remaining()
            )));
        }
        let mut chunk_offsets = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            chunk_offsets.push(r.read_u32()? as u64);
        }
        Ok(ChunkOffsetBox { chunk_offsets })
    }
}

/// 64-bit chunk offset box (co64).
#[derive(Debug, Clone)]
pub struct ChunkLargeOffsetBox {
    pub chunk_offsets: Vec<u64>,
}

impl ChunkLargeOffsetBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count as u64 * 8 > r.remaining() {
            return Err(Mp4Error::truncated(format!(
                "co64 declares {} entries but only {} bytes remain",
                entry_count,
                r.remaining()
            )));
        }
        let mut chunk_offsets = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            chunk_offsets.push(r.read_u64()?);
        }
        Ok(ChunkLargeOffsetBox { chunk_offsets })
    }
}
