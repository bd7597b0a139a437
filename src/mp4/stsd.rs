use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::avcc::AvcC;
use crate::mp4::hdlr::{HANDLER_SOUND, HANDLER_VIDEO};
use crate::mp4::r#box::{BoxReader, FourCC};
use crate::streams::seekable_stream::SeekableStream;

/// Visual sample entry (avc1 and friends) with its nested avcC
/// configuration.
#[derive(Debug, Clone)]
pub struct VisualSampleEntry {
    pub codingname: FourCC,
    pub data_reference_index: u16,
    pub width: u16,
    pub height: u16,
    pub compressor_name: String,
    pub avcc: AvcC,
}

impl VisualSampleEntry {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let (codingname, data_reference_index) = parse_sample_entry_prefix(r)?;
        r.read_u16()?; // pre_defined
        r.read_u16()?; // reserved
        r.skip(12)?; // pre_defined[3]
        let width = r.read_u16()?;
        let height = r.read_u16()?;
        r.read_u32()?; // horizresolution
        r.read_u32()?; // vertresolution
        r.read_u32()?; // reserved
        let frame_count = r.read_u16()?;
        if frame_count != 1 {
            return Err(Mp4Error::unsupported(format!(
                "visual sample entry declares frame_count {}, expected 1",
                frame_count
            )));
        }
        let compressor_name = r.read_fixed_string(32)?;
        r.read_u16()?; // depth
        r.read_u16()?; // pre_defined

        // A codec configuration child must fit in the remaining bytes.
        if r.remaining() <= 8 {
            return Err(Mp4Error::unsupported(format!(
                "'{}' sample entry has no room for a codec configuration box",
                codingname
            )));
        }
        let mut child = r.child()?;
        let avcc = AvcC::parse(&mut child)?;
        let consumed = child.finish()?;
        r.advance(consumed);

        Ok(VisualSampleEntry {
            codingname,
            data_reference_index,
            width,
            height,
            compressor_name,
            avcc,
        })
    }
}

/// Audio sample entry (mp4a and friends).
#[derive(Debug, Clone)]
pub struct AudioSampleEntry {
    pub codingname: FourCC,
    pub data_reference_index: u16,
    pub channel_count: u16,
    pub sample_size: u16,
    /// Sample rate as stored: 16.16 fixed point.
    pub sample_rate: u32,
}

impl AudioSampleEntry {
    pub fn parse<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<Self> {
        let (codingname, data_reference_index) = parse_sample_entry_prefix(r)?;
        r.skip(8)?; // reserved[2]
        let channel_count = r.read_u16()?;
        let sample_size = r.read_u16()?;
        r.read_u16()?; // pre_defined
        r.read_u16()?; // reserved
        let sample_rate = r.read_u32()?;
        Ok(AudioSampleEntry {
            codingname,
            data_reference_index,
            channel_count,
            sample_size,
            sample_rate,
        })
    }

    /// Integer sample rate in Hz.
    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate >> 16
    }
}

/// Common sample-entry prefix: 6 reserved bytes, then the data reference
/// index. The codingname is the entry's own box tag.
fn parse_sample_entry_prefix<S: SeekableStream>(r: &mut BoxReader<S>) -> Mp4Result<(FourCC, u16)> {
    let codingname = r.kind();
    r.skip(6)?;
    let data_reference_index = r.read_u16()?;
    Ok((codingname, data_reference_index))
}

/// Sample description box. Holds exactly one sample entry; the variant is
/// chosen by the enclosing track's handler type, supplied by the caller as
/// ancestor context.
#[derive(Debug, Clone, Default)]
pub struct SampleDescriptionBox {
    pub vide: Option<VisualSampleEntry>,
    pub soun: Option<AudioSampleEntry>,
}

impl SampleDescriptionBox {
    pub fn parse<S: SeekableStream>(
        r: &mut BoxReader<S>,
        handler: Option<FourCC>,
    ) -> Mp4Result<Self> {
        r.read_full_header()?;
        let handler = handler.ok_or_else(|| Mp4Error::MissingAncestorState {
            message: "stsd parsed before the track's hdlr box".to_string(),
        })?;
        let entry_count = r.read_u32()?;
        if entry_count != 1 {
            return Err(Mp4Error::unsupported(format!(
                "stsd declares {} sample entries, expected exactly 1",
                entry_count
            )));
        }

        let mut stsd = SampleDescriptionBox::default();
        let mut entry = r.child()?;
        if handler == HANDLER_VIDEO {
            stsd.vide = Some(VisualSampleEntry::parse(&mut entry)?);
        } else if handler == HANDLER_SOUND {
            stsd.soun = Some(AudioSampleEntry::parse(&mut entry)?);
        }
        // entries of other handler kinds are skipped wholesale
        let consumed = entry.finish()?;
        r.advance(consumed);
        Ok(stsd)
    }
}
