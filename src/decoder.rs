use crate::config::DecoderConfig;
use crate::envelope::envelope;
use crate::error::DecodeError;
use crate::filter::BandPass;
use crate::segment::segment;
use crate::symbols::elements_to_text;
use crate::timing::classify;

/// Decodes a mono sample buffer into text.
///
/// Runs the full pipeline: band-pass around the carrier, Hilbert
/// envelope, adaptive-threshold segmentation, timing classification
/// and code-table lookup. Pure and deterministic: identical inputs
/// always produce identical output, and nothing is shared between
/// invocations, so independent buffers may be decoded concurrently.
pub fn decode(
    samples: &[f32],
    sample_rate: u32,
    config: &DecoderConfig,
) -> Result<String, DecodeError> {
    if samples.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    if sample_rate == 0 {
        return Err(DecodeError::InvalidParameter(
            "sample rate must be positive".into(),
        ));
    }

    let bandpass = BandPass::design(config.order, config.low_hz, config.high_hz, sample_rate)?;
    let filtered = bandpass.apply(samples);
    log::debug!(
        "band-passed {} samples to {:.0}-{:.0} Hz (order {})",
        filtered.len(),
        config.low_hz,
        config.high_hz,
        config.order
    );

    let env = envelope(&filtered);
    let segments = segment(&env, config.threshold_factor)?;
    log::debug!("{} threshold segments", segments.len());

    let elements = classify(&segments, sample_rate, config)?;
    Ok(elements_to_text(&elements))
}
