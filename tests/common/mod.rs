//! Builders for synthetic MP4 files used by the integration tests.

/// Wrap `payload` in a box of the given kind.
pub fn make_box(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut buf = ((payload.len() + 8) as u32).to_be_bytes().to_vec();
    buf.extend_from_slice(kind);
    buf.extend_from_slice(payload);
    buf
}

/// Wrap `payload` in a full box: version byte and 24-bit flags first.
pub fn make_full_box(kind: &[u8; 4], version: u8, flags: u32, payload: &[u8]) -> Vec<u8> {
    let mut body = vec![version, (flags >> 16) as u8, (flags >> 8) as u8, flags as u8];
    body.extend_from_slice(payload);
    make_box(kind, &body)
}

pub fn u32_entries(count: u32, values: &[u32]) -> Vec<u8> {
    let mut buf = count.to_be_bytes().to_vec();
    for v in values {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    buf
}

pub fn ftyp() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(b"isom");
    body.extend_from_slice(&512u32.to_be_bytes());
    body.extend_from_slice(b"isom");
    body.extend_from_slice(b"avc1");
    make_box(b"ftyp", &body)
}

pub fn mvhd(timescale: u32, duration: u32) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&100u32.to_be_bytes()); // creation_time
    body.extend_from_slice(&200u32.to_be_bytes()); // modification_time
    body.extend_from_slice(&timescale.to_be_bytes());
    body.extend_from_slice(&duration.to_be_bytes());
    body.extend_from_slice(&[0u8; 80]); // rate through next_track_ID
    make_full_box(b"mvhd", 0, 0, &body)
}

pub fn tkhd(track_id: u32, duration: u32, width: u32, height: u32) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&0u32.to_be_bytes()); // creation_time
    body.extend_from_slice(&0u32.to_be_bytes()); // modification_time
    body.extend_from_slice(&track_id.to_be_bytes());
    body.extend_from_slice(&0u32.to_be_bytes()); // reserved
    body.extend_from_slice(&duration.to_be_bytes());
    body.extend_from_slice(&[0u8; 8 + 2 + 2 + 2 + 2 + 9 * 4]);
    body.extend_from_slice(&(width << 16).to_be_bytes());
    body.extend_from_slice(&(height << 16).to_be_bytes());
    make_full_box(b"tkhd", 0, 0, &body)
}

pub fn mdhd(timescale: u32, duration: u32, language: u16) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&timescale.to_be_bytes());
    body.extend_from_slice(&duration.to_be_bytes());
    body.extend_from_slice(&language.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes());
    make_full_box(b"mdhd", 0, 0, &body)
}

pub fn hdlr(handler: &[u8; 4]) -> Vec<u8> {
    let mut body = 0u32.to_be_bytes().to_vec();
    body.extend_from_slice(handler);
    body.extend_from_slice(&[0u8; 12]);
    make_full_box(b"hdlr", 0, 0, &body)
}

pub fn dinf() -> Vec<u8> {
    let url = make_full_box(b"url ", 0, 1, &[]);
    let mut dref = 1u32.to_be_bytes().to_vec();
    dref.extend_from_slice(&url);
    make_box(b"dinf", &make_full_box(b"dref", 0, 0, &dref))
}

fn avcc_payload() -> Vec<u8> {
    let sps: &[u8] = &[0x67, 0x42, 0x00, 0x1f, 0xe9];
    let pps: &[u8] = &[0x68, 0xce, 0x38, 0x80];
    let mut buf = vec![1u8, 0x64, 0x00, 0x1f, 0xff];
    buf.push(0xe1); // 1 SPS
    buf.extend_from_slice(&(sps.len() as u16).to_be_bytes());
    buf.extend_from_slice(sps);
    buf.push(1); // 1 PPS
    buf.extend_from_slice(&(pps.len() as u16).to_be_bytes());
    buf.extend_from_slice(pps);
    buf
}

pub fn visual_sample_entry(width: u16, height: u16, compressor: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&[0u8; 6]); // reserved
    body.extend_from_slice(&1u16.to_be_bytes()); // data_reference_index
    body.extend_from_slice(&0u16.to_be_bytes()); // pre_defined
    body.extend_from_slice(&0u16.to_be_bytes()); // reserved
    body.extend_from_slice(&[0u8; 12]); // pre_defined[3]
    body.extend_from_slice(&width.to_be_bytes());
    body.extend_from_slice(&height.to_be_bytes());
    body.extend_from_slice(&0x0048_0000u32.to_be_bytes()); // horizresolution
    body.extend_from_slice(&0x0048_0000u32.to_be_bytes()); // vertresolution
    body.extend_from_slice(&0u32.to_be_bytes()); // reserved
    body.extend_from_slice(&1u16.to_be_bytes()); // frame_count
    let mut name = vec![compressor.len() as u8];
    name.extend_from_slice(compressor.as_bytes());
    name.resize(32, 0);
    body.extend_from_slice(&name);
    body.extend_from_slice(&0x0018u16.to_be_bytes()); // depth
    body.extend_from_slice(&0xffffu16.to_be_bytes()); // pre_defined
    body.extend_from_slice(&make_box(b"avcC", &avcc_payload()));
    make_box(b"avc1", &body)
}

pub fn audio_sample_entry(channels: u16, sample_size: u16, rate_hz: u32) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&[0u8; 6]); // reserved
    body.extend_from_slice(&1u16.to_be_bytes()); // data_reference_index
    body.extend_from_slice(&[0u8; 8]); // reserved[2]
    body.extend_from_slice(&channels.to_be_bytes());
    body.extend_from_slice(&sample_size.to_be_bytes());
    body.extend_from_slice(&0u16.to_be_bytes()); // pre_defined
    body.extend_from_slice(&0u16.to_be_bytes()); // reserved
    body.extend_from_slice(&(rate_hz << 16).to_be_bytes());
    make_box(b"mp4a", &body)
}

fn stsd_box(entry: Vec<u8>) -> Vec<u8> {
    let mut body = 1u32.to_be_bytes().to_vec();
    body.extend_from_slice(&entry);
    make_full_box(b"stsd", 0, 0, &body)
}

/// Video sample table: one sample per chunk, sized per `sample_sizes`,
/// chunks placed at `chunk_offsets`.
pub fn video_stbl(sample_sizes: &[u32], chunk_offsets: &[u32]) -> Vec<u8> {
    let mut children = stsd_box(visual_sample_entry(640, 360, "lavc"));
    children.extend_from_slice(&make_full_box(
        b"stts",
        0,
        0,
        &u32_entries(1, &[sample_sizes.len() as u32, 1024]),
    ));
    children.extend_from_slice(&make_full_box(b"stss", 0, 0, &u32_entries(1, &[1])));
    children.extend_from_slice(&make_full_box(b"stsc", 0, 0, &u32_entries(1, &[1, 1, 1])));
    let mut stsz = 0u32.to_be_bytes().to_vec();
    stsz.extend_from_slice(&u32_entries(sample_sizes.len() as u32, sample_sizes));
    children.extend_from_slice(&make_full_box(b"stsz", 0, 0, &stsz));
    children.extend_from_slice(&make_full_box(
        b"stco",
        0,
        0,
        &u32_entries(chunk_offsets.len() as u32, chunk_offsets),
    ));
    make_box(b"stbl", &children)
}

/// Sound sample table: `sample_count` samples of `sample_size` bytes in a
/// single chunk at `chunk_offset`.
pub fn sound_stbl(sample_count: u32, sample_size: u32, chunk_offset: u32) -> Vec<u8> {
    let mut children = stsd_box(audio_sample_entry(2, 16, 44100));
    children.extend_from_slice(&make_full_box(
        b"stts",
        0,
        0,
        &u32_entries(1, &[sample_count, 1024]),
    ));
    children.extend_from_slice(&make_full_box(
        b"stsc",
        0,
        0,
        &u32_entries(1, &[1, sample_count, 1]),
    ));
    let mut stsz = sample_size.to_be_bytes().to_vec();
    stsz.extend_from_slice(&sample_count.to_be_bytes());
    children.extend_from_slice(&make_full_box(b"stsz", 0, 0, &stsz));
    children.extend_from_slice(&make_full_box(
        b"stco",
        0,
        0,
        &u32_entries(1, &[chunk_offset]),
    ));
    make_box(b"stbl", &children)
}

pub fn trak(tkhd_box: Vec<u8>, mdhd_box: Vec<u8>, hdlr_box: Vec<u8>, stbl_box: Vec<u8>) -> Vec<u8> {
    let mut minf = dinf();
    minf.extend_from_slice(&stbl_box);
    let minf = make_box(b"minf", &minf);

    let mut mdia = mdhd_box;
    mdia.extend_from_slice(&hdlr_box);
    mdia.extend_from_slice(&minf);
    let mdia = make_box(b"mdia", &mdia);

    let mut body = tkhd_box;
    body.extend_from_slice(&mdia);
    make_box(b"trak", &body)
}

/// A complete two-track movie with real sample data behind it. Returns
/// the file bytes plus the video and audio sample payloads, in order.
pub fn movie_with_data() -> (Vec<u8>, Vec<Vec<u8>>, Vec<Vec<u8>>) {
    let video_samples: Vec<Vec<u8>> = vec![vec![0x11; 10], vec![0x22; 20], vec![0x33; 15]];
    let audio_samples: Vec<Vec<u8>> = (0..4).map(|i| vec![0xa0 + i as u8; 100]).collect();

    let build = |video_offsets: &[u32], audio_offset: u32| -> Vec<u8> {
        let sizes: Vec<u32> = video_samples.iter().map(|s| s.len() as u32).collect();
        let video = trak(
            tkhd(1, 3000, 640, 360),
            mdhd(90000, 270_000, 0x15c7),
            hdlr(b"vide"),
            video_stbl(&sizes, video_offsets),
        );
        let audio = trak(
            tkhd(2, 3000, 0, 0),
            mdhd(44100, 176_400, 0x55c4),
            hdlr(b"soun"),
            sound_stbl(4, 100, audio_offset),
        );

        let mut moov = mvhd(1000, 3000);
        moov.extend_from_slice(&video);
        moov.extend_from_slice(&audio);
        let moov = make_box(b"moov", &moov);

        let mut mdat = Vec::new();
        for s in &video_samples {
            mdat.extend_from_slice(s);
        }
        for s in &audio_samples {
            mdat.extend_from_slice(s);
        }

        let mut file = ftyp();
        file.extend_from_slice(&moov);
        file.extend_from_slice(&make_box(b"mdat", &mdat));
        file
    };

    // First pass with placeholder offsets to learn where mdat lands; the
    // offset fields are fixed-width, so the second pass keeps the layout.
    let draft = build(&[0, 0, 0], 0);
    let mdat_payload = (draft.len()
        - video_samples.iter().map(Vec::len).sum::<usize>()
        - audio_samples.iter().map(Vec::len).sum::<usize>()) as u32;

    let mut video_offsets = Vec::new();
    let mut at = mdat_payload;
    for s in &video_samples {
        video_offsets.push(at);
        at += s.len() as u32;
    }
    let audio_offset = at;

    let file = build(&video_offsets, audio_offset);
    assert_eq!(file.len(), draft.len());
    (file, video_samples, audio_samples)
}
