use log::debug;

use crate::errors::Mp4Result;
use crate::mp4::dinf::DataInformationBox;
use crate::mp4::r#box::{BoxReader, FourCC};
use crate::mp4::stbl::SampleTableBox;
use crate::streams::seekable_stream::SeekableStream;

/// Media information box: data references plus the sample table. The
/// enclosing track's handler type is threaded through to the sample
/// table parsers.
#[derive(Debug, Clone, Default)]
pub struct MediaInformationBox {
    pub dinf: Option<DataInformationBox>,
    pub stbl: Option<SampleTableBox>,
}

impl MediaInformationBox {
    pub fn parse<S: SeekableStream>(
        r: &mut BoxReader<S>,
        handler: Option<FourCC>,
    ) -> Mp4Result<Self> {
        let mut minf = MediaInformationBox::default();
        while r.has_remaining() {
            let mut child = r.child()?;
            match child.kind().as_bytes() {
                b"dinf" => minf.dinf = Some(DataInformationBox::parse(&mut child)?),
                b"stbl" => minf.stbl = Some(SampleTableBox::parse(&mut child, handler)?),
                other => debug!(
                    "skipping unrecognized '{}' box inside minf",
                    String::from_utf8_lossy(other)
                ),
            }
            let consumed = child.finish()?;
            r.advance(consumed);
        }
        Ok(minf)
    }
}
