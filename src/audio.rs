use anyhow::{Result, bail};
use hound::{SampleFormat, WavReader};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use std::path::Path;

/// Reads a WAV file into a mono f32 buffer at its native sample rate.
/// Multi-channel files are mixed down by averaging.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    log::info!("WAV spec: {spec:?}");

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32768.0))
            .collect::<Result<_, _>>()?,
        (SampleFormat::Float, 32) => reader.samples::<f32>().collect::<Result<_, _>>()?,
        (format, bits) => bail!("unsupported sample format: {bits}-bit {format:?}"),
    };

    let mono = if spec.channels > 1 {
        samples
            .chunks_exact(spec.channels as usize)
            .map(|frame| frame.iter().sum::<f32>() / spec.channels as f32)
            .collect()
    } else {
        samples
    };
    Ok((mono, spec.sample_rate))
}

/// Resamples a mono buffer with a windowed-sinc resampler. Useful for
/// bringing high-rate recordings down to a cheaper working rate before
/// decoding.
pub fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == to_rate {
        return Ok(samples.to_vec());
    }
    if from_rate == 0 || to_rate == 0 {
        bail!("sample rates must be positive ({from_rate} -> {to_rate})");
    }
    log::info!("resampling {from_rate} Hz -> {to_rate} Hz");

    let chunk_size = 1024;
    let mut resampler = SincFixedIn::<f32>::new(
        to_rate as f64 / from_rate as f64,
        2.0,
        SincInterpolationParameters {
            sinc_len: 256,
            f_cutoff: 0.95,
            interpolation: SincInterpolationType::Linear,
            oversampling_factor: 256,
            window: WindowFunction::BlackmanHarris,
        },
        chunk_size,
        1,
    )?;

    let mut output = Vec::new();
    for chunk in samples.chunks(chunk_size) {
        let mut frames = if chunk.len() == chunk_size {
            resampler.process(&[chunk], None)?
        } else {
            resampler.process_partial(Some(&[chunk]), None)?
        };
        output.append(&mut frames.remove(0));
    }
    Ok(output)
}
