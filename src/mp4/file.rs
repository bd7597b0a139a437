use std::path::Path;

use log::debug;

use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::ftyp::FileTypeBox;
use crate::mp4::moov::MovieBox;
use crate::mp4::r#box::{read_root_header, BoxReader};
use crate::mp4::trak::TrackBox;
use crate::streams::seekable_stream::{LocalSeekableStream, SeekableStream};

/// A fully parsed ISO Base Media file: the box tree built in one forward
/// pass, immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct Mp4File {
    pub ftyp: Option<FileTypeBox>,
    pub moov: Option<MovieBox>,
}

impl Mp4File {
    /// Parse the box tree from a seekable stream. Top-level boxes other
    /// than `ftyp` and `moov` (typically `mdat` and `free`) are skipped.
    pub fn parse<S: SeekableStream>(src: &mut S) -> Mp4Result<Self> {
        let mut file = Mp4File::default();
        while let Some(header) = read_root_header(src)? {
            debug!("top-level '{}' box, {} bytes", header.kind, header.size);
            let mut r = BoxReader::new(src, &header);
            match header.kind.as_bytes() {
                b"ftyp" => file.ftyp = Some(FileTypeBox::parse(&mut r)?),
                b"moov" => file.moov = Some(MovieBox::parse(&mut r)?),
                _ => {}
            }
            r.finish()?;
        }
        Ok(file)
    }

    /// Open and parse a local file.
    pub fn open<P: AsRef<Path>>(path: P) -> Mp4Result<Self> {
        let mut stream = LocalSeekableStream::open(path).map_err(Mp4Error::Io)?;
        Self::parse(&mut stream)
    }

    pub fn movie(&self) -> Option<&MovieBox> {
        self.moov.as_ref()
    }

    pub fn tracks(&self) -> &[TrackBox] {
        self.moov.as_ref().map(|m| m.traks.as_slice()).unwrap_or(&[])
    }
}
