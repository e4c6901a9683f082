//! Streams a header-less mono `f32` PCM file through the engine and prints
//! tempo estimates as they become available.
//!
//! Usage:
//!   cargo run --package beatnik --example stream_tempo <path> [sample_rate]

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};

use beatnik::config::FFT_STEP;
use beatnik::Engine;

fn print_usage(program: &str) {
    eprintln!("Stream Tempo Example");
    eprintln!("=====================");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {program} <path> [sample_rate]");
    eprintln!();
    eprintln!("<path> must be a header-less stream of little-endian mono f32 samples.");
    eprintln!("sample_rate defaults to 48000.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = &args[0];

    if args.len() < 2 {
        print_usage(program);
        std::process::exit(1);
    }

    let path = &args[1];
    let sample_rate: f32 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(48_000.0);

    let mut engine = Engine::try_new(sample_rate)?;
    let mut reader = BufReader::new(File::open(path)?);

    let mut raw = [0u8; FFT_STEP * 4];
    let mut chunk = [0.0f32; FFT_STEP];
    let mut hop_index = 0usize;

    loop {
        match reader.read_exact(&mut raw) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }

        for (sample, bytes) in chunk.iter_mut().zip(raw.chunks_exact(4)) {
            *sample = f32::from_le_bytes(bytes.try_into().unwrap());
        }

        if engine.process(&chunk) {
            let bpm = engine.estimate_tempo();
            println!("hop {hop_index}: tempo = {bpm:.2} BPM");
        }
        hop_index += 1;
    }

    Ok(())
}
