use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Sample size box (stsz). A nonzero default size means every sample has
/// that size and the per-sample table is absent.
#[derive(Debug, Clone)]
pub struct SampleSizeBox {
    pub default_sample_size: u32,
    pub sample_count: u32,
    pub sample_sizes: Vec<u32>,
}

impl SampleSizeBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let default_sample_size = r.read_u32()?;
        let sample_count = r.read_u32()?;
        let mut sample_sizes = Vec::new();
        if default_sample_size == 0 {
            if sample_count as u64 * 4 > r.remaining() {
                return Err(Mp4Error::truncated(format!(
                    "stsz declares {} per-sample sizes but only {} bytes remain",
                    sample_count,
                    r.remaining()
                )));
            }
            sample_sizes.reserve(sample_count as usize);
            for _ in 0..sample_count {
                sample_sizes.push(r.read_u32()?);
            }
        }
        Ok(SampleSizeBox {
            default_sample_size,
            sample_count,
            sample_sizes,
        })
    }

    /// Size of sample `index` (zero-based).
    pub fn size_of(&self, index: usize) -> u32 {
        if self.default_sample_size != 0 {
            self.default_sample_size
        } else {
            self.sample_sizes[index]
        }
    }
}
