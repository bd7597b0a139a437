use crate::errors::Mp4Result;
use crate::mp4::r#box::{BoxReader, FourCC};
use crate::streams::seekable_stream::SeekableStream;

/// Handler type tag for video tracks.
pub const HANDLER_VIDEO: FourCC = FourCC(*b"vide");
/// Handler type tag for sound tracks.
pub const HANDLER_SOUND: FourCC = FourCC(*b"soun");

/// Handler box: declares the media kind of the enclosing track.
#[derive(Debug, Clone)]
pub struct HandlerBox {
    pub handler_type: FourCC,
}

impl HandlerBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        r.read_full_header()?;
        r.read_u32()?; // pre_defined
        let handler_type = r.read_fourcc()?;
        // reserved[3] and the trailing name are left to the skip step
        Ok(HandlerBox { handler_type })
    }

    pub fn is_video(&self) -> bool {
        self.handler_type == HANDLER_VIDEO
    }

    pub fn is_sound(&self) -> bool {
        self.handler_type == HANDLER_SOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mp4::r#box::read_box_header;
    use crate::mp4::test_support::make_full_box;
    use std::io::Cursor;

    #[test]
    fn test_parse_handler_type() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&0u32.to_be_bytes());
        payload.extend_from_slice(b"vide");
        payload.extend_from_slice(&[0u8; 12]); // reserved
        payload.extend_from_slice(b"VideoHandler\0");
        let mut src = Cursor::new(make_full_box(b"hdlr", 0, 0, &payload));
        let header = read_box_header(&mut src).unwrap();
        let mut r = BoxReader::new(&mut src, &header);
        let hdlr = HandlerBox::parse(&mut r).unwrap();
        r.finish().unwrap();

        assert!(hdlr.is_video());
        assert!(!hdlr.is_sound());
    }
}
