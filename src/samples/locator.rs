use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::stsc::SampleToChunkEntry;
use crate::mp4::stsz::SampleSizeBox;

/// Absolute position of one sample in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLocation {
    pub offset: u64,
    pub len: u32,
}

/// Combine the sample-size table, sample-to-chunk table and chunk-offset
/// table into one absolute file location per sample.
///
/// The fold is stateful and strictly sequential: the position of a sample
/// within its chunk depends on the sizes of every prior sample in that
/// chunk, so samples must be walked in ascending index order.
pub fn locate_samples(
    stsz: &SampleSizeBox,
    stsc: &[SampleToChunkEntry],
    chunk_offsets: &[u64],
) -> Mp4Result<Vec<SampleLocation>> {
    if stsz.sample_count > 0 && stsc.is_empty() {
        return Err(Mp4Error::IncompleteSampleTable {
            message: format!(
                "{} samples declared but the sample-to-chunk table is empty",
                stsz.sample_count
            ),
        });
    }

    let mut locations = Vec::with_capacity(stsz.sample_count as usize);
    let mut chunk_id: u32 = 1; // chunks are numbered from 1
    let mut chunk_samples: u32 = 0;
    let mut offset_in_chunk: u64 = 0;
    let mut stsc_index: usize = 0;

    for sample_id in 0..stsz.sample_count as usize {
        let len = stsz.size_of(sample_id);

        chunk_samples += 1;
        if chunk_samples > stsc[stsc_index].samples_per_chunk {
            chunk_id += 1;
            chunk_samples = 1;
            offset_in_chunk = 0;
        }

        if chunk_id as usize > chunk_offsets.len() {
            return Err(Mp4Error::ChunkIndexOutOfRange {
                message: format!(
                    "sample {} lands in chunk {} but only {} chunk offsets exist",
                    sample_id,
                    chunk_id,
                    chunk_offsets.len()
                ),
            });
        }

        // A new sample-to-chunk run may begin at exactly this chunk, with
        // a different samples-per-chunk count.
        if let Some(next) = stsc.get(stsc_index + 1) {
            if next.first_chunk == chunk_id {
                stsc_index += 1;
                chunk_samples = 1;
                offset_in_chunk = 0;
            }
        }

        let offset = chunk_offsets[chunk_id as usize - 1] + offset_in_chunk;
        offset_in_chunk += len as u64;
        locations.push(SampleLocation { offset, len });
    }

    Ok(locations)
}
