use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::segment::Segment;

/// Timing class of a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Dot,
    Dash,
    /// Gap between dots and dashes inside one letter.
    IntraGap,
    /// Gap between two letters of the same word.
    LetterGap,
    /// Gap between two words.
    WordGap,
}

/// Derives the unit (dot) duration and classifies every segment.
///
/// The unit is the shortest on-segment. With the default ratios a
/// segment of duration `d` is classified against `unit * 1.5` and
/// `unit * 4.5`; equality lands on the longer class, so `d == unit *
/// 1.5` is a dash (or a letter gap). Comparisons stay in the sample
/// domain where the small integer multiples are exact.
pub fn classify(
    segments: &[Segment],
    sample_rate: u32,
    config: &DecoderConfig,
) -> Result<Vec<Element>, DecodeError> {
    let unit = segments
        .iter()
        .filter(|s| s.is_on)
        .map(|s| s.duration)
        .min()
        .ok_or(DecodeError::NoSignalDetected)?;

    let unit_secs = unit as f32 / sample_rate as f32;
    log::info!(
        "unit duration {:.1} ms (~{:.0} WPM)",
        unit_secs * 1000.0,
        1.2 / unit_secs
    );

    let dash_len = unit as f32 * config.dash_ratio;
    let word_len = unit as f32 * config.word_gap_ratio;

    Ok(segments
        .iter()
        .map(|s| {
            let d = s.duration as f32;
            if s.is_on {
                if d < dash_len { Element::Dot } else { Element::Dash }
            } else if d < dash_len {
                Element::IntraGap
            } else if d < word_len {
                Element::LetterGap
            } else {
                Element::WordGap
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(is_on: bool, duration: usize, start: usize) -> Segment {
        Segment {
            is_on,
            duration,
            start,
        }
    }

    #[test]
    fn all_off_segments_mean_no_signal() {
        let segments = [seg(false, 100, 0)];
        assert!(matches!(
            classify(&segments, 8000, &DecoderConfig::default()),
            Err(DecodeError::NoSignalDetected)
        ));
    }

    #[test]
    fn classifies_canonical_timing() {
        // dot, intra gap, dash, letter gap, dot, word gap, dash
        let segments = [
            seg(true, 10, 0),
            seg(false, 10, 10),
            seg(true, 30, 20),
            seg(false, 30, 50),
            seg(true, 10, 80),
            seg(false, 70, 90),
            seg(true, 30, 160),
        ];
        let elements = classify(&segments, 8000, &DecoderConfig::default()).unwrap();
        assert_eq!(
            elements,
            vec![
                Element::Dot,
                Element::IntraGap,
                Element::Dash,
                Element::LetterGap,
                Element::Dot,
                Element::WordGap,
                Element::Dash,
            ]
        );
    }

    #[test]
    fn boundary_durations_land_on_the_longer_class() {
        // unit = 10; 15 = unit * 1.5 and 45 = unit * 4.5 exactly.
        let segments = [
            seg(true, 10, 0),
            seg(false, 15, 10),
            seg(true, 15, 25),
            seg(false, 45, 40),
            seg(true, 14, 85),
            seg(false, 44, 99),
        ];
        let elements = classify(&segments, 8000, &DecoderConfig::default()).unwrap();
        assert_eq!(
            elements,
            vec![
                Element::Dot,
                Element::LetterGap,
                Element::Dash,
                Element::WordGap,
                Element::Dot,
                Element::LetterGap,
            ]
        );
    }

    #[test]
    fn unit_is_the_shortest_on_segment() {
        // With unit 8, a 30-sample tone is well past 1.5 units.
        let segments = [seg(true, 30, 0), seg(false, 10, 30), seg(true, 8, 40)];
        let elements = classify(&segments, 8000, &DecoderConfig::default()).unwrap();
        assert_eq!(
            elements,
            vec![Element::Dash, Element::IntraGap, Element::Dot]
        );
    }
}
