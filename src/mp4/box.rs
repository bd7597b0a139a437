use std::cmp::Ordering;
use std::fmt;
use std::io::{Read, SeekFrom};

use crate::bits::reader::{read_u24_be, read_u32_be, read_u8};
use crate::errors::{Mp4Error, Mp4Result};
use crate::streams::seekable_stream::SeekableStream;

/// Four-byte tag identifying a box type, brand or handler.
///
/// Not required to be valid text; display is lossy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCC({})", self)
    }
}

impl From<&[u8; 4]> for FourCC {
    fn from(bytes: &[u8; 4]) -> Self {
        FourCC(*bytes)
    }
}

/// Box header information
#[derive(Debug, Clone)]
pub struct BoxHeader {
    pub kind: FourCC,
    /// Total declared length in bytes, including the header. A declared
    /// size of 0 ("extends to end of stream") is resolved against the
    /// stream length at read time, so this is always the real extent.
    pub size: u64,
    /// 8, or 16 when the 64-bit size extension was present.
    pub header_size: u64,
}

/// Version + 24-bit flags prefix carried by every full box.
#[derive(Debug, Clone, Copy)]
pub struct FullBoxHeader {
    pub version: u8,
    pub flags: u32,
}

/// Read a box header from the stream.
///
/// Field order follows the size-extension convention of the format: a
/// 32-bit size, the 64-bit extended size when the 32-bit field is 1, then
/// the 4-byte type tag.
pub fn read_box_header<S: SeekableStream>(src: &mut S) -> Mp4Result<BoxHeader> {
    let size32 = read_u32_be(src)?;
    finish_box_header(src, size32)
}

/// Read a box header at the file root, where a clean end of stream is not
/// an error. Returns `None` when no bytes remain.
pub fn read_root_header<S: SeekableStream>(src: &mut S) -> Mp4Result<Option<BoxHeader>> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        let n = src.read(&mut buf[filled..]).map_err(Mp4Error::from)?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    if filled == 0 {
        return Ok(None);
    }
    if filled < buf.len() {
        return Err(Mp4Error::truncated("partial box size at end of stream"));
    }
    finish_box_header(src, u32::from_be_bytes(buf)).map(Some)
}

fn finish_box_header<S: SeekableStream>(src: &mut S, size32: u32) -> Mp4Result<BoxHeader> {
    let mut size = size32 as u64;
    let mut header_size = 8u64;
    if size32 == 1 {
        // 64-bit extension, composed from two dependent 32-bit reads.
        let high = read_u32_be(src)?;
        let low = read_u32_be(src)?;
        size = ((high as u64) << 32) | low as u64;
        header_size = 16;
    }
    let mut kind = [0u8; 4];
    src.read_exact(&mut kind).map_err(Mp4Error::from)?;
    let kind = FourCC(kind);

    if size32 == 0 {
        // Sentinel: the box extends to the end of the stream.
        let body_start = src.stream_position().map_err(Mp4Error::Io)?;
        let end = src.seek(SeekFrom::End(0)).map_err(Mp4Error::Io)?;
        src.seek(SeekFrom::Start(body_start)).map_err(Mp4Error::Io)?;
        size = header_size + (end - body_start);
    } else if size < header_size {
        return Err(Mp4Error::corrupt(format!(
            "'{}' declares size {} smaller than its {}-byte header",
            kind, size, header_size
        )));
    }

    Ok(BoxHeader {
        kind,
        size,
        header_size,
    })
}

/// Sequential reader over one box's body with strict byte accounting.
///
/// `offset` counts bytes consumed relative to the box's own start,
/// including the header. Body parsers read fields through this reader and
/// end with [`BoxReader::finish`], which skips any trailing unread bytes
/// and guarantees the invariant `offset == size` — overshooting the
/// declared size is a fatal corrupt-box error.
pub struct BoxReader<'a, S: SeekableStream> {
    src: &'a mut S,
    kind: FourCC,
    size: u64,
    offset: u64,
}

impl<'a, S: SeekableStream> BoxReader<'a, S> {
    pub fn new(src: &'a mut S, header: &BoxHeader) -> Self {
        BoxReader {
            src,
            kind: header.kind,
            size: header.size,
            offset: header.header_size,
        }
    }

    pub fn kind(&self) -> FourCC {
        self.kind
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn remaining(&self) -> u64 {
        self.size.saturating_sub(self.offset)
    }

    pub fn has_remaining(&self) -> bool {
        self.offset < self.size
    }

    pub fn read_u8(&mut self) -> Mp4Result<u8> {
        let v = read_u8(&mut *self.src)?;
        self.offset += 1;
        Ok(v)
    }

    pub fn read_u16(&mut self) -> Mp4Result<u16> {
        let mut buf = [0u8; 2];
        self.src.read_exact(&mut buf).map_err(Mp4Error::from)?;
        self.offset += 2;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn read_u24(&mut self) -> Mp4Result<u32> {
        let v = read_u24_be(&mut *self.src)?;
        self.offset += 3;
        Ok(v)
    }

    pub fn read_u32(&mut self) -> Mp4Result<u32> {
        let v = read_u32_be(&mut *self.src)?;
        self.offset += 4;
        Ok(v)
    }

    /// Wide read: two dependent 32-bit reads, high word first. Kept as an
    /// explicit composition because offset accounting advances in two
    /// steps internally.
    pub fn read_u64(&mut self) -> Mp4Result<u64> {
        let high = self.read_u32()?;
        let low = self.read_u32()?;
        Ok(((high as u64) << 32) | low as u64)
    }

    pub fn read_fourcc(&mut self) -> Mp4Result<FourCC> {
        let mut buf = [0u8; 4];
        self.src.read_exact(&mut buf).map_err(Mp4Error::from)?;
        self.offset += 4;
        Ok(FourCC(buf))
    }

    pub fn read_bytes(&mut self, n: usize) -> Mp4Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.src.read_exact(&mut buf).map_err(Mp4Error::from)?;
        self.offset += n as u64;
        Ok(buf)
    }

    /// Version + flags prefix, consumed by every full box immediately
    /// after the generic header.
    pub fn read_full_header(&mut self) -> Mp4Result<FullBoxHeader> {
        let version = self.read_u8()?;
        let flags = self.read_u24()?;
        Ok(FullBoxHeader { version, flags })
    }

    /// Length-prefixed string stored in a fixed `n`-byte slot (compressor
    /// names use a 32-byte slot). Always consumes exactly `n` bytes of
    /// accounting regardless of the stored length.
    pub fn read_fixed_string(&mut self, n: u64) -> Mp4Result<String> {
        let start = self.offset;
        let len = self.read_u8()? as u64;
        if len > n - 1 {
            return Err(Mp4Error::corrupt(format!(
                "string length {} overflows its {}-byte slot in '{}'",
                len, n, self.kind
            )));
        }
        let payload = if len > 0 {
            self.read_bytes(len as usize)?
        } else {
            Vec::new()
        };
        if len + 1 < 32 {
            let pad = 32 - (len + 1);
            self.src
                .seek(SeekFrom::Current(pad as i64))
                .map_err(Mp4Error::Io)?;
        }
        self.offset = start + n;
        Ok(String::from_utf8_lossy(&payload).into_owned())
    }

    /// Advance the stream by `n` bytes without interpreting them. Fails if
    /// the skip would pass the box's declared end.
    pub fn skip(&mut self, n: u64) -> Mp4Result<()> {
        if self.offset + n > self.size {
            return Err(Mp4Error::corrupt(format!(
                "skip of {} bytes passes the end of '{}' (offset {}, size {})",
                n, self.kind, self.offset, self.size
            )));
        }
        let step = i64::try_from(n)
            .map_err(|_| Mp4Error::corrupt(format!("skip of {} bytes in '{}'", n, self.kind)))?;
        self.src
            .seek(SeekFrom::Current(step))
            .map_err(Mp4Error::Io)?;
        self.offset += n;
        Ok(())
    }

    /// Read one child box header and return a reader over its body. The
    /// caller must `finish()` the child and credit its consumed size back
    /// via [`BoxReader::advance`].
    pub fn child(&mut self) -> Mp4Result<BoxReader<'_, S>> {
        let header = read_box_header(&mut *self.src)?;
        Ok(BoxReader::new(&mut *self.src, &header))
    }

    /// Credit `n` bytes consumed by a finished child box.
    pub fn advance(&mut self, n: u64) {
        self.offset += n;
    }

    /// Close out the box: skip trailing unread bytes up to the declared
    /// size, or fail if more than the declared size was consumed. Returns
    /// the total consumed size for the parent's accounting.
    pub fn finish(self) -> Mp4Result<u64> {
        match self.offset.cmp(&self.size) {
            Ordering::Less => {
                let step = i64::try_from(self.size - self.offset).map_err(|_| {
                    Mp4Error::corrupt(format!("'{}' declares size {}", self.kind, self.size))
                })?;
                self.src
                    .seek(SeekFrom::Current(step))
                    .map_err(Mp4Error::Io)?;
            }
            Ordering::Greater => {
                return Err(Mp4Error::corrupt(format!(
                    "'{}' consumed {} bytes but declares only {}",
                    self.kind, self.offset, self.size
                )));
            }
            Ordering::Equal => {}
        }
        Ok(self.size)
    }
}
