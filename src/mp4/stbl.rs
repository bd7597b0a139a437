use log::debug;

use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::ctts::CompositionOffsetBox;
use crate::mp4::hdlr::{HANDLER_SOUND, HANDLER_VIDEO};
use crate::mp4::r#box::{BoxReader, FourCC};
use crate::mp4::stco::{ChunkLargeOffsetBox, ChunkOffsetBox};
use crate::mp4::stsc::SampleToChunkBox;
use crate::mp4::stsd::SampleDescriptionBox;
use crate::mp4::stss::SyncSampleBox;
use crate::mp4::stsz::SampleSizeBox;
use crate::mp4::stts::TimeToSampleBox;
use crate::streams::seekable_stream::SeekableStream;

/// Sample table box: aggregates the index tables that drive sample
/// location. Consistency against the track's handler type is checked as
/// soon as the children are parsed.
#[derive(Debug, Clone, Default)]
pub struct SampleTableBox {
    pub stsd: Option<SampleDescriptionBox>,
    pub stts: Option<TimeToSampleBox>,
    pub ctts: Option<CompositionOffsetBox>,
    pub stss: Option<SyncSampleBox>,
    pub stsc: Option<SampleToChunkBox>,
    pub stsz: Option<SampleSizeBox>,
    pub stco: Option<ChunkOffsetBox>,
    pub co64: Option<ChunkLargeOffsetBox>,
}

impl SampleTableBox {
    pub fn parse<S: SeekableStream>(
        r: &mut BoxReader<S>,
        handler: Option<FourCC>,
    ) -> Mp4Result<Self> {
        let mut stbl = SampleTableBox::default();
        while r.has_remaining() {
            let mut child = r.child()?;
            match child.kind().as_bytes() {
                b"stsd" => stbl.stsd = Some(SampleDescriptionBox::parse(&mut child, handler)?),
                b"stts" => stbl.stts = Some(TimeToSampleBox::parse(&mut child)?),
                b"ctts" => stbl.ctts = Some(CompositionOffsetBox::parse(&mut child)?),
                b"stss" => stbl.stss = Some(SyncSampleBox::parse(&mut child)?),
                b"stsc" => stbl.stsc = Some(SampleToChunkBox::parse(&mut child)?),
                b"stsz" => stbl.stsz = Some(SampleSizeBox::parse(&mut child)?),
                b"stco" => stbl.stco = Some(ChunkOffsetBox::parse(&mut child)?),
                b"co64" => stbl.co64 = Some(ChunkLargeOffsetBox::parse(&mut child)?),
                other => debug!(
                    "skipping unrecognized '{}' box inside stbl",
                    String::from_utf8_lossy(other)
                ),
            }
            let consumed = child.finish()?;
            r.advance(consumed);
        }
        stbl.validate(handler)?;
        Ok(stbl)
    }

    /// Chunk offsets from whichever offset table is present, stco first.
    pub fn chunk_offsets(&self) -> Option<&[u64]> {
        self.stco
            .as_ref()
            .map(|b| b.chunk_offsets.as_slice())
            .or_else(|| self.co64.as_ref().map(|b| b.chunk_offsets.as_slice()))
    }

    /// Enforce the per-media-kind table requirements. Handler types other
    /// than video and sound carry no constraints; their tracks are parsed
    /// but not validated or extractable.
    fn validate(&self, handler: Option<FourCC>) -> Mp4Result<()> {
        let handler = match handler {
            Some(h) => h,
            None => {
                return Err(Mp4Error::MissingAncestorState {
                    message: "stbl validated before the track's hdlr box".to_string(),
                })
            }
        };
        if handler == HANDLER_VIDEO {
            require(self.stsd.is_some(), "video", "stsd")?;
            require(self.stts.is_some(), "video", "stts")?;
            require(self.stss.is_some(), "video", "stss")?;
            require(self.stsc.is_some(), "video", "stsc")?;
            require(self.stsz.is_some(), "video", "stsz")?;
            require(self.chunk_offsets().is_some(), "video", "stco/co64")?;
        } else if handler == HANDLER_SOUND {
            require(self.stsd.is_some(), "sound", "stsd")?;
            require(self.stts.is_some(), "sound", "stts")?;
            forbid(self.stss.is_none(), "stss")?;
            forbid(self.ctts.is_none(), "ctts")?;
            require(self.stsc.is_some(), "sound", "stsc")?;
            require(self.stsz.is_some(), "sound", "stsz")?;
            require(self.chunk_offsets().is_some(), "sound", "stco/co64")?;
        }
        Ok(())
    }
}

fn require(present: bool, kind: &str, name: &str) -> Mp4Result<()> {
    if present {
        Ok(())
    } else {
        Err(Mp4Error::IncompleteSampleTable {
            message: format!("{} track is missing a required '{}' box", kind, name),
        })
    }
}

fn forbid(absent: bool, name: &str) -> Mp4Result<()> {
    if absent {
        Ok(())
    } else {
        Err(Mp4Error::IncompleteSampleTable {
            message: format!("sound track must not contain a '{}' box", name),
        })
    }
}
