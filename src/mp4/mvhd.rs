use crate::errors::Mp4Result;
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Movie header box. Version 1 widens the time and duration fields to
/// 64 bits; both versions are stored widened here.
#[derive(Debug, Clone)]
pub struct MovieHeaderBox {
    pub creation_time: u64,
    pub modification_time: u64,
    pub timescale: u32,
    pub duration: u64,
}

impl MovieHeaderBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let full = r.read_full_header()?;
        let (creation_time, modification_time, timescale, duration) = if full.version == 1 {
            (r.read_u64()?, r.read_u64()?, r.read_u32()?, r.read_u64()?)
        } else {
            (
                r.read_u32()? as u64,
                r.read_u32()? as u64,
                r.read_u32()?,
                r.read_u32()? as u64,
            )
        };
        Ok(MovieHeaderBox {
            creation_time,
            modification_time,
            timescale,
            duration,
        })
    }
}
