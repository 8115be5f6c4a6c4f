use rustfft::num_complex::Complex;
use std::f64::consts::PI;

use crate::error::DecodeError;

/// A Butterworth band-pass filter in transfer-function form.
///
/// Designed once per decode from the normalized band edges and applied
/// causally in a single forward pass. Design and filtering run in f64:
/// a band-pass of order N has a denominator of degree 2N, and the
/// coefficients of the default order-5 design are too ill-conditioned
/// for f32.
pub struct BandPass {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl BandPass {
    /// Designs a band-pass of the given order with passband
    /// `[low_hz, high_hz]`. The edges must satisfy
    /// `0 < low < high < sample_rate / 2`.
    pub fn design(
        order: usize,
        low_hz: f32,
        high_hz: f32,
        sample_rate: u32,
    ) -> Result<Self, DecodeError> {
        let nyquist = sample_rate as f64 / 2.0;
        if order == 0 {
            return Err(DecodeError::InvalidParameter(
                "filter order must be at least 1".into(),
            ));
        }
        let low = low_hz as f64;
        let high = high_hz as f64;
        if low <= 0.0 {
            return Err(DecodeError::InvalidParameter(format!(
                "low cutoff {low_hz} Hz must be positive"
            )));
        }
        if high >= nyquist {
            return Err(DecodeError::InvalidParameter(format!(
                "high cutoff {high_hz} Hz must be below the Nyquist frequency {nyquist} Hz"
            )));
        }
        if low >= high {
            return Err(DecodeError::InvalidParameter(format!(
                "low cutoff {low_hz} Hz must be below high cutoff {high_hz} Hz"
            )));
        }

        // Band edges normalized by Nyquist, pre-warped so the bilinear
        // transform below lands them on the requested frequencies.
        let fs = 2.0;
        let w1 = 2.0 * fs * (PI * (low / nyquist) / fs).tan();
        let w2 = 2.0 * fs * (PI * (high / nyquist) / fs).tan();
        let bw = w2 - w1;
        let wo = (w1 * w2).sqrt();

        // Analog low-pass prototype: poles evenly spaced on the left
        // half of the unit circle, no finite zeros, unit gain.
        let proto: Vec<Complex<f64>> = (0..order)
            .map(|i| {
                let m = (2 * i as i32 - (order as i32 - 1)) as f64;
                -Complex::new(0.0, PI * m / (2.0 * order as f64)).exp()
            })
            .collect();

        // Low-pass to band-pass: every prototype pole splits into two,
        // and `order` zeros appear at s = 0.
        let mut s_poles = Vec::with_capacity(2 * order);
        for &p in &proto {
            let p = p * (bw / 2.0);
            let d = (p * p - Complex::from(wo * wo)).sqrt();
            s_poles.push(p + d);
            s_poles.push(p - d);
        }
        let s_zeros = vec![Complex::from(0.0); order];
        let mut gain = bw.powi(order as i32);

        // Bilinear transform into the z-domain. The degree deficit of
        // the analog system becomes zeros at z = -1.
        let fs2 = Complex::from(2.0 * fs);
        let mut num = Complex::from(1.0);
        let mut den = Complex::from(1.0);
        let mut z_zeros: Vec<Complex<f64>> = s_zeros
            .iter()
            .map(|&z| {
                num *= fs2 - z;
                (fs2 + z) / (fs2 - z)
            })
            .collect();
        let z_poles: Vec<Complex<f64>> = s_poles
            .iter()
            .map(|&p| {
                den *= fs2 - p;
                (fs2 + p) / (fs2 - p)
            })
            .collect();
        z_zeros.resize(s_poles.len(), Complex::from(-1.0));
        gain *= (num / den).re;

        let b = poly(&z_zeros).iter().map(|c| c.re * gain).collect();
        let a = poly(&z_poles).iter().map(|c| c.re).collect();
        Ok(Self { b, a })
    }

    /// Filters the buffer in one causal forward pass (direct form II
    /// transposed, zero initial state). Output length equals input
    /// length.
    pub fn apply(&self, input: &[f32]) -> Vec<f32> {
        let n = self.b.len();
        let mut state = vec![0.0f64; n - 1];
        let mut output = Vec::with_capacity(input.len());
        for &sample in input {
            let x = sample as f64;
            let y = self.b[0] * x + state[0];
            for i in 1..n {
                let carry = if i < n - 1 { state[i] } else { 0.0 };
                state[i - 1] = self.b[i] * x + carry - self.a[i] * y;
            }
            output.push(y as f32);
        }
        output
    }
}

/// Expands a set of roots into monic polynomial coefficients,
/// highest degree first.
fn poly(roots: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut coeffs = vec![Complex::from(1.0)];
    for &root in roots {
        coeffs.push(Complex::from(0.0));
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] -= root * prev;
        }
    }
    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    fn rms(samples: &[f32]) -> f32 {
        (samples.iter().map(|&s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
    }

    #[test]
    fn rejects_invalid_band_edges() {
        assert!(matches!(
            BandPass::design(5, 0.0, 800.0, 8000),
            Err(DecodeError::InvalidParameter(_))
        ));
        assert!(matches!(
            BandPass::design(5, 400.0, 4000.0, 8000),
            Err(DecodeError::InvalidParameter(_))
        ));
        assert!(matches!(
            BandPass::design(5, 800.0, 400.0, 8000),
            Err(DecodeError::InvalidParameter(_))
        ));
        assert!(matches!(
            BandPass::design(0, 400.0, 800.0, 8000),
            Err(DecodeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn preserves_length() {
        let filter = BandPass::design(5, 400.0, 800.0, 8000).unwrap();
        assert_eq!(filter.apply(&[0.0; 137]).len(), 137);
        assert_eq!(filter.apply(&[]).len(), 0);
    }

    #[test]
    fn passes_in_band_tone() {
        let filter = BandPass::design(5, 400.0, 800.0, 8000).unwrap();
        let input = sine(600.0, 8000, 8000);
        let output = filter.apply(&input);
        // Skip the first half to let the transient die out.
        let gain = rms(&output[4000..]) / rms(&input[4000..]);
        assert!(gain > 0.7 && gain < 1.3, "passband gain was {gain}");
    }

    #[test]
    fn rejects_out_of_band_tone() {
        let filter = BandPass::design(5, 400.0, 800.0, 8000).unwrap();
        let input = sine(100.0, 8000, 8000);
        let output = filter.apply(&input);
        let gain = rms(&output[4000..]) / rms(&input[4000..]);
        assert!(gain < 0.02, "stopband gain was {gain}");
    }
}
