use log::debug;

use crate::errors::Mp4Result;
use crate::mp4::hdlr::HandlerBox;
use crate::mp4::mdhd::MediaHeaderBox;
use crate::mp4::minf::MediaInformationBox;
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Media box. `hdlr` is required by the format to precede `minf`; its
/// handler type is handed down as ancestor context so sample-description
/// parsing can pick the right entry variant.
#[derive(Debug, Clone, Default)]
pub struct MediaBox {
    pub mdhd: Option<MediaHeaderBox>,
    pub hdlr: Option<HandlerBox>,
    pub minf: Option<MediaInformationBox>,
}

impl MediaBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let mut mdia = MediaBox::default();
        while r.has_remaining() {
            let mut child = r.child()?;
            match child.kind().as_bytes() {
                b"mdhd" => mdia.mdhd = Some(MediaHeaderBox::parse(&mut child)?),
                b"hdlr" => mdia.hdlr = Some(HandlerBox::parse(&mut child)?),
                b"minf" => {
                    let handler = mdia.hdlr.as_ref().map(|h| h.handler_type);
                    mdia.minf = Some(MediaInformationBox::parse(&mut child, handler)?);
                }
                other => debug!(
                    "skipping unrecognized '{}' box inside mdia",
                    String::from_utf8_lossy(other)
                ),
            }
            let consumed = child.finish()?;
            r.advance(consumed);
        }
        Ok(mdia)
    }
}
