use crate::errors::Mp4Result;
use crate::mp4::r#box::BoxReader;
use crate::streams::seekable_stream::SeekableStream;

/// Media header box: media timescale/duration and the packed language
/// code.
#[derive(Debug, Clone)]
pub struct MediaHeaderBox {
    pub timescale: u32,
    pub duration: u64,
    pub language: String,
}

impl MediaHeaderBox {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let full = r.read_full_header()?;
        let (timescale, duration) = if full.version == 1 {
            r.read_u64()?; // creation_time
            r.read_u64()?; // modification_time
            (r.read_u32()?, r.read_u64()?)
        } else {
            r.read_u32()?; // creation_time
            r.read_u32()?; // modification_time
            (r.read_u32()?, r.read_u32()? as u64)
        };
        let language = decode_language(r.read_u16()?);
        Ok(MediaHeaderBox {
            timescale,
            duration,
            language,
        })
    }
}

/// Decode the packed ISO 639-2/T language field: one pad bit, then three
/// 5-bit groups, each offset by 0x60 to yield a lowercase letter.
pub fn decode_language(code: u16) -> String {
    let chars = [
        ((code >> 10) & 0x1f) as u8 + 0x60,
        ((code >> 5) & 0x1f) as u8 + 0x60,
        (code & 0x1f) as u8 + 0x60,
    ];
    chars.iter().map(|&c| c as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mp4::r#box::read_box_header;
    use crate::mp4::test_support::make_full_box;
    use std::io::Cursor;

    #[test]
    fn test_decode_language() {
        assert_eq!(decode_language(0x15c7), "eng");
        assert_eq!(decode_language(0x55c4), "und");
    }

    #[test]
    fn test_parse_version_0() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&0u32.to_be_bytes());
        payload.extend_from_slice(&0u32.to_be_bytes());
        payload.extend_from_slice(&44100u32.to_be_bytes());
        payload.extend_from_slice(&441000u32.to_be_bytes());
        payload.extend_from_slice(&0x15c7u16.to_be_bytes());
        payload.extend_from_slice(&0u16.to_be_bytes()); // pre_defined
        let mut src = Cursor::new(make_full_box(b"mdhd", 0, 0, &payload));
        let header = read_box_header(&mut src).unwrap();
        let mut r = BoxReader::new(&mut src, &header);
        let mdhd = MediaHeaderBox::parse(&mut r).unwrap();
        r.finish().unwrap();

        assert_eq!(mdhd.timescale, 44100);
        assert_eq!(mdhd.duration, 441000);
        assert_eq!(mdhd.language, "eng");
    }
}
