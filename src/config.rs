/// Tunable parameters of the decoding pipeline.
///
/// The defaults suit a hand-keyed tone in the 400-800 Hz range, the
/// band most practice oscillators and receivers center on.
#[derive(Debug, Clone, Copy)]
pub struct DecoderConfig {
    /// Lower band-pass cutoff in Hz.
    pub low_hz: f32,
    /// Upper band-pass cutoff in Hz.
    pub high_hz: f32,
    /// Butterworth filter order.
    pub order: usize,
    /// Detection threshold as a multiple of the mean envelope level.
    pub threshold_factor: f32,
    /// An on-segment at least this many units long is a dash; an
    /// off-segment at least this long closes the current letter.
    pub dash_ratio: f32,
    /// An off-segment at least this many units long closes the word.
    ///
    /// Canonical ITU timing puts the word gap at 7 units, which would
    /// suggest a boundary near 5. The 4.5 default keeps the letter/word
    /// cut at 3 * dash_ratio; raise it for strict ITU senders.
    pub word_gap_ratio: f32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            low_hz: 400.0,
            high_hz: 800.0,
            order: 5,
            threshold_factor: 1.5,
            dash_ratio: 1.5,
            word_gap_ratio: 4.5,
        }
    }
}
