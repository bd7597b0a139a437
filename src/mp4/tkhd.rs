use crate::errors::Mp4Result;
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Track header box. Width and height are stored as 16.16 fixed point in
/// the file and truncated to integer pixels here.
#[derive(Debug, Clone)]
pub struct TrackHeaderBox {
    pub track_id: u32,
    pub duration: u64,
    pub width: u32,
    pub height: u32,
}

impl TrackHeaderBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let full = r.read_full_header()?;
        let (track_id, duration) = if full.version == 1 {
            r.read_u64()?; // creation_time
            r.read_u64()?; // modification_time
            let track_id = r.read_u32()?;
            r.skip(4)?; // reserved
            (track_id, r.read_u64()?)
        } else {
            r.read_u32()?; // creation_time
            r.read_u32()?; // modification_time
            let track_id = r.read_u32()?;
            r.skip(4)?; // reserved
            (track_id, r.read_u32()? as u64)
        };

        // reserved[2], layer, alternate_group, volume, reserved, matrix[9]
        r.skip(8 + 2 + 2 + 2 + 2 + 9 * 4)?;

        let width = r.read_u32()? >> 16;
        let height = r.read_u32()? >> 16;

        Ok(TrackHeaderBox {
            track_id,
            duration,
            width,
            height,
        })
    }
}
