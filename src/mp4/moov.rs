use log::debug;

use crate::errors::Mp4Result;
use crate::mp4::mvhd::MovieHeaderBox;
use crate::mp4::r#box::BoxReader;
use crate::mp4::trak::TrackBox;
use crate::streams::seekable_stream::SeekableStream;

/// Movie box: the movie header and every track, in file order.
#[derive(Debug, Clone, Default)]
pub struct MovieBox {
    pub mvhd: Option<MovieHeaderBox>,
    pub traks: Vec<TrackBox>,
}

impl MovieBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let mut moov = MovieBox::default();
        while r.has_remaining() {
            let mut child = r.child()?;
            match child.kind().as_bytes() {
                b"mvhd" => moov.mvhd = Some(MovieHeaderBox::parse(&mut child)?),
                b"trak" => moov.traks.push(TrackBox::parse(&mut child)?),
                other => debug!(
                    "skipping unrecognized '{}' box inside moov",
                    String::from_utf8_lossy(other)
                ),
            }
            let consumed = child.finish()?;
            r.advance(consumed);
        }
        Ok(moov)
    }
}
