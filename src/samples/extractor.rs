use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use log::{debug, info};

use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::file::Mp4File;
use crate::mp4::trak::TrackBox;
use crate::samples::locator::locate_samples;

/// Extract every sample of every video/sound track into
/// `<out_root>/<track_id>/<sample_index>`.
///
/// Each track opens its own read handle on the source, so tracks are
/// independent units; the source is never written to.
pub fn extract_all_tracks(input: &Path, out_root: &Path, file: &Mp4File) -> Mp4Result<()> {
    let moov = file
        .movie()
        .ok_or_else(|| Mp4Error::unsupported("file has no moov box".to_string()))?;
    fs::create_dir_all(out_root).map_err(Mp4Error::Io)?;
    for trak in &moov.traks {
        extract_track(input, out_root, trak)?;
    }
    Ok(())
}

fn extract_track(input: &Path, out_root: &Path, trak: &TrackBox) -> Mp4Result<()> {
    let handler = match trak.handler_type() {
        Some(h) if h == crate::mp4::HANDLER_VIDEO || h == crate::mp4::HANDLER_SOUND => h,
        other => {
            debug!("skipping track with handler {:?}: not extractable", other);
            return Ok(());
        }
    };
    let tkhd = trak
        .tkhd
        .as_ref()
        .ok_or_else(|| Mp4Error::unsupported("trak has no tkhd box".to_string()))?;
    let stbl = trak
        .sample_table()
        .ok_or_else(|| Mp4Error::unsupported("trak has no sample table".to_string()))?;

    // Validation at parse time guarantees these tables for video/sound.
    let stsz = stbl.stsz.as_ref().ok_or_else(|| Mp4Error::IncompleteSampleTable {
        message: "stsz missing at extraction time".to_string(),
    })?;
    let stsc = stbl.stsc.as_ref().ok_or_else(|| Mp4Error::IncompleteSampleTable {
        message: "stsc missing at extraction time".to_string(),
    })?;
    let chunk_offsets = stbl
        .chunk_offsets()
        .ok_or_else(|| Mp4Error::IncompleteSampleTable {
            message: "chunk offset table missing at extraction time".to_string(),
        })?;

    let locations = locate_samples(stsz, &stsc.entries, chunk_offsets)?;

    let track_dir = out_root.join(tkhd.track_id.to_string());
    fs::create_dir_all(&track_dir).map_err(Mp4Error::Io)?;

    let mut src = File::open(input).map_err(Mp4Error::Io)?;
    let mut buf = Vec::new();
    for (sample_id, location) in locations.iter().enumerate() {
        src.seek(SeekFrom::Start(location.offset))
            .map_err(Mp4Error::Io)?;
        buf.resize(location.len as usize, 0);
        src.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                Mp4Error::TruncatedSample {
                    message: format!(
                        "sample {} of track {}: wanted {} bytes at offset {}",
                        sample_id, tkhd.track_id, location.len, location.offset
                    ),
                }
            } else {
                Mp4Error::Io(e)
            }
        })?;
        fs::write(track_dir.join(sample_id.to_string()), &buf).map_err(Mp4Error::Io)?;
    }

    info!(
        "track {} ({}): extracted {} samples",
        tkhd.track_id,
        handler,
        locations.len()
    );
    Ok(())
}
