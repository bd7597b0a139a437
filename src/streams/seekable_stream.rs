use std::io::{self, Read, Seek};
use std::path::Path;

/// A seekable, read-only byte source.
///
/// The parser makes a single forward pass over one shared stream position;
/// anything that is `Read + Seek` qualifies (local files, in-memory cursors
/// in tests).
pub trait SeekableStream: Read + Seek {}

impl<T: Read + Seek> SeekableStream for T {}

/// Local file wrapper
pub struct LocalSeekableStream(std::fs::File);

impl LocalSeekableStream {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalSeekableStream(std::fs::File::open(path)?))
    }
}

impl Read for LocalSeekableStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl Seek for LocalSeekableStream {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }
}
