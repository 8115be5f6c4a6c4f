use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cwdec::audio::{read_wav, resample};
use cwdec::{DecoderConfig, MorseGenerator, decode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a Morse recording into text
    Decode {
        /// Path to the input WAV file
        #[arg(value_name = "WAV_FILE")]
        wav_file: PathBuf,
        /// Lower band-pass cutoff in Hz
        #[arg(long, default_value_t = 400.0)]
        low: f32,
        /// Upper band-pass cutoff in Hz
        #[arg(long, default_value_t = 800.0)]
        high: f32,
        /// Butterworth filter order
        #[arg(long, default_value_t = 5)]
        order: usize,
        /// Detection threshold as a multiple of the mean envelope level
        #[arg(long, default_value_t = 1.5)]
        threshold: f32,
        /// Resample the audio to this rate before decoding
        #[arg(long)]
        rate: Option<u32>,
    },
    /// Generate a Morse WAV file from text
    Generate {
        /// Text to encode (A-Z, 0-9 and spaces)
        text: String,
        /// Output WAV path
        #[arg(short, long, value_name = "WAV_FILE")]
        output: PathBuf,
        /// Tone frequency in Hz
        #[arg(long, default_value_t = 600.0)]
        frequency: f32,
        /// Keying speed in words per minute
        #[arg(long, default_value_t = 20.0)]
        wpm: f32,
        /// Sample rate in Hz
        #[arg(long, default_value_t = 8000)]
        rate: u32,
    },
}

fn main() -> Result<()> {
    // Use `RUST_LOG=info` or `RUST_LOG=debug` to see pipeline diagnostics.
    env_logger::init();

    match Cli::parse().command {
        Command::Decode {
            wav_file,
            low,
            high,
            order,
            threshold,
            rate,
        } => {
            log::info!("Opening WAV file: {wav_file:?}");
            let (samples, file_rate) = read_wav(&wav_file)?;
            let (samples, sample_rate) = match rate {
                Some(rate) if rate != file_rate => (resample(&samples, file_rate, rate)?, rate),
                _ => (samples, file_rate),
            };
            let config = DecoderConfig {
                low_hz: low,
                high_hz: high,
                order,
                threshold_factor: threshold,
                ..DecoderConfig::default()
            };
            let text = decode(&samples, sample_rate, &config)?;
            println!("{text}");
        }
        Command::Generate {
            text,
            output,
            frequency,
            wpm,
            rate,
        } => {
            let generator = MorseGenerator::new(rate, frequency, wpm);
            generator.generate_wav_file(&text, &output)?;
            log::info!("Wrote {output:?}");
        }
    }
    Ok(())
}
