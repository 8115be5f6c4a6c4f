use thiserror::Error;

/// Failure modes of the decoding pipeline.
///
/// Unknown Morse tokens are not represented here: they decode to a
/// literal `?` in the output so the rest of the message stays aligned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A tunable parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The sample or envelope buffer has zero length.
    #[error("input buffer is empty")]
    EmptyInput,

    /// No envelope segment rose above the detection threshold, so a
    /// unit duration cannot be derived.
    #[error("no signal detected above threshold")]
    NoSignalDetected,
}
