use std::env;
use std::path::Path;
use std::process;

use mp4extract::{build_report, extract_all_tracks, parse_file, MovieReport};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: mp4extract <input.mp4> [output-dir]");
        process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2)) {
        eprintln!("mp4extract: {}", e);
        process::exit(1);
    }
}

fn run(input: &str, out_dir: Option<&String>) -> mp4extract::Mp4Result<()> {
    let file = parse_file(input)?;
    let report = build_report(&file)?;
    print_report(&report);

    if let Some(dir) = out_dir {
        extract_all_tracks(Path::new(input), Path::new(dir), &file)?;
    }
    Ok(())
}

fn print_report(report: &MovieReport) {
    let movie = &report.movie;
    println!(
        "movie: timescale {} duration {} ({:.2}s)",
        movie.timescale,
        movie.duration,
        movie.duration as f64 / movie.timescale as f64
    );

    for track in &report.tracks {
        let handler = track.handler.as_deref().unwrap_or("????");
        let language = track.language.as_deref().unwrap_or("---");
        println!(
            "track {}: handler {} language {} duration {}",
            track.track_id, handler, language, track.duration
        );
        if let Some(video) = &track.video {
            println!(
                "  video: {}x{} compressor '{}'",
                video.width, video.height, video.compressor_name
            );
        }
        if let Some(audio) = &track.audio {
            println!(
                "  audio: {} ch, {} bit, {} Hz",
                audio.channel_count, audio.sample_size, audio.sample_rate
            );
        }
    }
}
