//! Read-only reporting over a parsed box tree. The report mirrors what
//! the movie and track headers declare without reinterpreting it, so it
//! can be serialized or printed as-is.

pub mod types;

pub use types::{AudioEntryInfo, MovieInfo, MovieReport, TrackInfo, VideoEntryInfo};

use crate::errors::{Mp4Error, Mp4Result};
use crate::mp4::file::Mp4File;
use crate::mp4::trak::TrackBox;

/// Build a [`MovieReport`] from a parsed file. Fails when the file has no
/// `moov` box or when a track lacks its `tkhd` header; everything else is
/// reported as far as it was parsed.
pub fn build_report(file: &Mp4File) -> Mp4Result<MovieReport> {
    let moov = file
        .movie()
        .ok_or_else(|| Mp4Error::unsupported("file has no moov box"))?;
    let mvhd = moov
        .mvhd
        .as_ref()
        .ok_or_else(|| Mp4Error::unsupported("moov has no mvhd box"))?;

    let movie = MovieInfo {
        creation_time: mvhd.creation_time,
        modification_time: mvhd.modification_time,
        timescale: mvhd.timescale,
        duration: mvhd.duration,
    };

    let mut tracks = Vec::with_capacity(moov.traks.len());
    for trak in &moov.traks {
        tracks.push(track_info(trak)?);
    }

    Ok(MovieReport { movie, tracks })
}

fn track_info(trak: &TrackBox) -> Mp4Result<TrackInfo> {
    let tkhd = trak
        .tkhd
        .as_ref()
        .ok_or_else(|| Mp4Error::unsupported("trak without a tkhd box"))?;

    let language = trak
        .mdia
        .as_ref()
        .and_then(|m| m.mdhd.as_ref())
        .map(|h| h.language.clone());
    let handler = trak.handler_type().map(|h| h.to_string());

    let stsd = trak.sample_table().and_then(|stbl| stbl.stsd.as_ref());
    let video = stsd.and_then(|d| d.vide.as_ref()).map(|v| VideoEntryInfo {
        width: v.width,
        height: v.height,
        compressor_name: v.compressor_name.clone(),
    });
    let audio = stsd.and_then(|d| d.soun.as_ref()).map(|a| AudioEntryInfo {
        channel_count: a.channel_count,
        sample_size: a.sample_size,
        sample_rate: a.sample_rate_hz(),
    });

    Ok(TrackInfo {
        track_id: tkhd.track_id,
        duration: tkhd.duration,
        width: tkhd.width,
        height: tkhd.height,
        language,
        handler,
        video,
        audio,
    })
}
