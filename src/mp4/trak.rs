use log::debug;

use crate::errors::Mp4Result;
use crate::mp4::mdia::MediaBox;
use crate::mp4::r#box::BoxReader;
use crate::mp4::stbl::SampleTableBox;
use crate::mp4::tkhd::TrackHeaderBox;
use crate::streams::seekable_stream::SeekableStream;

/// Track box: header plus media subtree.
#[derive(Debug, Clone, Default)]
pub struct TrackBox {
    pub tkhd: Option<TrackHeaderBox>,
    pub mdia: Option<MediaBox>,
}

impl TrackBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let mut trak = TrackBox::default();
        while r.has_remaining() {
            let mut child = r.child()?;
            match child.kind().as_bytes() {
                b"tkhd" => trak.tkhd = Some(TrackHeaderBox::parse(&mut child)?),
                b"mdia" => trak.mdia = Some(MediaBox::parse(&mut child)?),
                other => debug!(
                    "skipping unrecognized '{}' box inside trak",
                    String::from_utf8_lossy(other)
                ),
            }
            let consumed = child.finish()?;
            r.advance(consumed);
        }
        Ok(trak)
    }

    /// Sample table of this track, when the full mdia → minf → stbl chain
    /// is present.
    pub fn sample_table(&self) -> Option<&SampleTableBox> {
        self.mdia.as_ref()?.minf.as_ref()?.stbl.as_ref()
    }

    /// Handler type of this track's media, if declared.
    pub fn handler_type(&self) -> Option<crate::mp4::r#box::FourCC> {
        Some(self.mdia.as_ref()?.hdlr.as_ref()?.handler_type)
    }
}
