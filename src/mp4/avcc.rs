//! AVCConfigurationBox (`avcC`) parsing: sequence and picture parameter
//! sets for H.264 streams.

use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::r#box::{BoxReader, FourCC};
use crate::streams::seekable_stream::SeekableStream;

/// Parsed AVCDecoderConfigurationRecord.
#[derive(Debug, Clone)]
pub struct AvcC {
    /// Sequence Parameter Sets
    pub sequence_parameter_sets: Vec<Vec<u8>>,
    /// Picture Parameter Sets
    pub picture_parameter_sets: Vec<Vec<u8>>,
}

impl AvcC {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        if r.kind() != FourCC(*b"avcC") {
            return Err(Mp4Error::WrongCodecVersion {
                message: format!("expected an avcC configuration, found '{}'", r.kind()),
            });
        }
        let configuration_version = r.read_u8()?;
        if configuration_version != 1 {
            return Err(Mp4Error::WrongCodecVersion {
                message: format!(
                    "avcC configuration version {}, expected 1",
                    configuration_version
                ),
            });
        }
        // profile, compatibility, level, lengthSizeMinusOne
        r.skip(4)?;

        let num_sps = r.read_u8()? & 0b11111;
        let mut sequence_parameter_sets = Vec::with_capacity(num_sps as usize);
        for _ in 0..num_sps {
            let len = r.read_u16()? as usize;
            sequence_parameter_sets.push(r.read_bytes(len)?);
        }

        let num_pps = r.read_u8()?;
        let mut picture_parameter_sets = Vec::with_capacity(num_pps as usize);
        for _ in 0..num_pps {
            let len = r.read_u16()? as usize;
            picture_parameter_sets.push(r.read_bytes(len)?);
        }

        Ok(AvcC {
            sequence_parameter_sets,
            picture_parameter_sets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mp4::r#box::read_box_header;
    use crate::mp4::test_support::{avcc_payload, make_box};
    use std::io::Cursor;

    #[test]
    fn test_parse_parameter_sets() {
        let payload = avcc_payload(&[&[0x67, 0x42, 0x00]], &[&[0x68, 0xce]]);
        let mut src = Cursor::new(make_box(b"avcC", &payload));
        let header = read_box_header(&mut src).unwrap();
        let mut r = BoxReader::new(&mut src, &header);
        let avcc = AvcC::parse(&mut r).unwrap();
        r.finish().unwrap();

        assert_eq!(avcc.sequence_parameter_sets, vec![vec![0x67, 0x42, 0x00]]);
        assert_eq!(avcc.picture_parameter_sets, vec![vec![0x68, 0xce]]);
    }

    #[test]
    fn test_sps_count_masks_reserved_bits() {
        // high 3 bits of the SPS count byte are reserved and must be
        // ignored: 0xE1 means one SPS.
        let mut payload = vec![1u8, 0x64, 0x00, 0x1f, 0xff];
        payload.push(0xe1);
        payload.extend_from_slice(&2u16.to_be_bytes());
        payload.extend_from_slice(&[0x67, 0x42]);
        payload.push(0); // no PPS
        let mut src = Cursor::new(make_box(b"avcC", &payload));
        let header = read_box_header(&mut src).unwrap();
        let mut r = BoxReader::new(&mut src, &header);
        let avcc = AvcC::parse(&mut r).unwrap();
        r.finish().unwrap();

        assert_eq!(avcc.sequence_parameter_sets.len(), 1);
        assert!(avcc.picture_parameter_sets.is_empty());
    }

    #[test]
    fn test_wrong_configuration_version() {
        let payload = [2u8, 0, 0, 0, 0, 0, 0];
        let mut src = Cursor::new(make_box(b"avcC", &payload));
        let header = read_box_header(&mut src).unwrap();
        let mut r = BoxReader::new(&mut src, &header);
        let err = AvcC::parse(&mut r).unwrap_err();
        assert!(matches!(err, Mp4Error::WrongCodecVersion { .. }));
    }

    #[test]
    fn test_wrong_box_tag() {
        let mut src = Cursor::new(make_box(b"hvcC", &[1u8, 0, 0, 0, 0, 0, 0]));
        let header = read_box_header(&mut src).unwrap();
        let mut r = BoxReader::new(&mut src, &header);
        let err = AvcC::parse(&mut r).unwrap_err();
        assert!(matches!(err, Mp4Error::WrongCodecVersion { .. }));
    }
}
