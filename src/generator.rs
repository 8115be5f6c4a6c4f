use anyhow::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f32::consts::PI;
use std::path::Path;

use crate::symbols::char_to_token;
use crate::timing::Element;

/// Synthesizes Morse tone bursts with canonical 1:3:7 timing, either
/// as an in-memory buffer or as a 16-bit PCM WAV file. Used by the
/// test suite and the CLI's `generate` command.
pub struct MorseGenerator {
    sample_rate: u32,
    frequency: f32,
    dot_duration: f32,
}

impl MorseGenerator {
    pub fn new(sample_rate: u32, frequency: f32, wpm: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            // PARIS convention: a dot lasts 1.2/WPM seconds.
            dot_duration: 1.2 / wpm,
        }
    }

    /// Renders `text` (A-Z, 0-9 and spaces; anything else is skipped)
    /// as a mono sample buffer, padded with a few units of silence on
    /// both ends so filter and envelope transients stay clear of the
    /// first and last symbol.
    pub fn generate(&self, text: &str) -> Vec<f32> {
        let mut samples = Vec::new();
        self.push_silence(&mut samples, 5.0 * self.dot_duration);
        for element in self.text_to_elements(text) {
            match element {
                Element::Dot => self.push_tone(&mut samples, self.dot_duration),
                Element::Dash => self.push_tone(&mut samples, 3.0 * self.dot_duration),
                Element::IntraGap => self.push_silence(&mut samples, self.dot_duration),
                Element::LetterGap => self.push_silence(&mut samples, 3.0 * self.dot_duration),
                Element::WordGap => self.push_silence(&mut samples, 7.0 * self.dot_duration),
            }
        }
        self.push_silence(&mut samples, 5.0 * self.dot_duration);
        samples
    }

    /// Writes `text` as a 16-bit PCM WAV file.
    pub fn generate_wav_file<P: AsRef<Path>>(&self, text: &str, path: P) -> Result<()> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec)?;
        for sample in self.generate(text) {
            writer.write_sample((sample * i16::MAX as f32) as i16)?;
        }
        writer.finalize()?;
        Ok(())
    }

    fn text_to_elements(&self, text: &str) -> Vec<Element> {
        let words: Vec<Vec<&str>> = text
            .split_whitespace()
            .map(|word| word.chars().filter_map(char_to_token).collect())
            .filter(|tokens: &Vec<&str>| !tokens.is_empty())
            .collect();

        let mut elements = Vec::new();
        for (word_idx, tokens) in words.iter().enumerate() {
            if word_idx > 0 {
                elements.push(Element::WordGap);
            }
            for (token_idx, token) in tokens.iter().enumerate() {
                if token_idx > 0 {
                    elements.push(Element::LetterGap);
                }
                for (symbol_idx, symbol) in token.chars().enumerate() {
                    if symbol_idx > 0 {
                        elements.push(Element::IntraGap);
                    }
                    elements.push(match symbol {
                        '.' => Element::Dot,
                        _ => Element::Dash,
                    });
                }
            }
        }
        elements
    }

    fn push_tone(&self, samples: &mut Vec<f32>, duration: f32) {
        let count = (duration * self.sample_rate as f32) as usize;
        // 50% amplitude to stay clear of clipping.
        for i in 0..count {
            let t = i as f32 / self.sample_rate as f32;
            samples.push(0.5 * (2.0 * PI * self.frequency * t).sin());
        }
    }

    fn push_silence(&self, samples: &mut Vec<f32>, duration: f32) {
        let count = (duration * self.sample_rate as f32) as usize;
        samples.extend(std::iter::repeat_n(0.0, count));
    }
}
