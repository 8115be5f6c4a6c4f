use crate::error::DecodeError;

/// A maximal run of consecutive envelope samples on the same side of
/// the detection threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Whether the run is above the threshold (tone present).
    pub is_on: bool,
    /// Run length in samples, always at least 1.
    pub duration: usize,
    /// Index of the run's first sample in the envelope buffer.
    pub start: usize,
}

/// Thresholds an envelope buffer and run-length encodes it into
/// chronological segments.
///
/// The threshold is `mean(envelope) * threshold_factor`, re-derived
/// per call so it tracks the overall signal loudness rather than any
/// absolute level. The returned segments partition the buffer exactly:
/// durations sum to the envelope length and on/off states strictly
/// alternate.
pub fn segment(envelope: &[f32], threshold_factor: f32) -> Result<Vec<Segment>, DecodeError> {
    if envelope.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let mean = envelope.iter().sum::<f32>() / envelope.len() as f32;
    let threshold = mean * threshold_factor;
    log::debug!("envelope mean {mean:.4e}, threshold {threshold:.4e}");

    let mut segments = Vec::new();
    let mut is_on = envelope[0] > threshold;
    let mut start = 0;
    for (i, &value) in envelope.iter().enumerate().skip(1) {
        let on = value > threshold;
        if on != is_on {
            segments.push(Segment {
                is_on,
                duration: i - start,
                start,
            });
            is_on = on;
            start = i;
        }
    }
    segments.push(Segment {
        is_on,
        duration: envelope.len() - start,
        start,
    });
    Ok(segments)
}
