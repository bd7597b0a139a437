use crate::errors::Mp4Result;
use crate::mp4::r#box::{BoxReader, FourCC};
use crate::streams::seekable_stream::SeekableStream;

/// File type box: major brand plus the list of compatible brands.
#[derive(Debug, Clone)]
pub struct FileTypeBox {
    pub major_brand: FourCC,
    pub minor_version: u32,
    pub compatible_brands: Vec<FourCC>,
}

impl FileTypeBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let major_brand = r.read_fourcc()?;
        let minor_version = r.read_u32()?;
        let mut compatible_brands = Vec::new();
        // A trailing partial brand overshoots the declared size and is
        // rejected by the dispatcher's accounting check.
        while r.has_remaining() {
            compatible_brands.push(r.read_fourcc()?);
        }
        Ok(FileTypeBox {
            major_brand,
            minor_version,
            compatible_brands,
        })
    }
}
