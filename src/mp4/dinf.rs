use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Data reference box. Only single-entry, self-contained references are
/// supported: anything else would silently mis-locate sample bytes later,
/// so multi-source layouts are rejected up front.
#[derive(Debug, Clone)]
pub struct DataReferenceBox {
    pub entry_count: u32,
}

impl DataReferenceBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        let entry_count = r.read_u32()?;
        if entry_count != 1 {
            return Err(Mp4Error::unsupported(format!(
                "dref declares {} entries, only single-source files are supported",
                entry_count
            )));
        }
        let mut entry = r.child()?;
        let entry_header = entry.read_full_header()?;
        if entry_header.flags != 1 {
            return Err(Mp4Error::unsupported(format!(
                "dref entry flags {:#x}, only self-contained data is supported",
                entry_header.flags
            )));
        }
        let consumed = entry.finish()?;
        r.advance(consumed);
        Ok(DataReferenceBox { entry_count })
    }
}

/// Data information box. Strict container: unlike the soft containers,
/// any child other than `dref` is a fatal error.
#[derive(Debug, Clone)]
pub struct DataInformationBox {
    pub dref: DataReferenceBox,
}

impl DataInformationBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let mut dref = None;
        while r.has_remaining() {
            let mut child = r.child()?;
            match child.kind().as_bytes() {
                b"dref" => dref = Some(DataReferenceBox::parse(&mut child)?),
                other => {
                    return Err(Mp4Error::unsupported(format!(
                        "unexpected '{}' box inside dinf",
                        String::from_utf8_lossy(other)
                    )));
                }
            }
            let consumed = child.finish()?;
            r.advance(consumed);
        }
        let dref =
            dref.ok_or_else(|| Mp4Error::unsupported("dinf contains no dref box".to_string()))?;
        Ok(DataInformationBox { dref })
    }
}
