use serde::Serialize;

/// Movie-level facts from the movie header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieInfo {
    pub creation_time: u64,
    pub modification_time: u64,
    pub timescale: u32,
    pub duration: u64,
}

/// Codec facts from a video sample entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoEntryInfo {
    pub width: u16,
    pub height: u16,
    pub compressor_name: String,
}

/// Codec facts from an audio sample entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioEntryInfo {
    pub channel_count: u16,
    pub sample_size: u16,
    pub sample_rate: u32,
}

/// Per-track facts from the track and media headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInfo {
    pub track_id: u32,
    pub duration: u64,
    pub width: u32,
    pub height: u32,
    pub language: Option<String>,
    pub handler: Option<String>,
    pub video: Option<VideoEntryInfo>,
    pub audio: Option<AudioEntryInfo>,
}

/// The complete read-only report over a parsed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieReport {
    pub movie: MovieInfo,
    pub tracks: Vec<TrackInfo>,
}
