use rustfft::{FftPlanner, num_complex::Complex};

/// Computes the instantaneous amplitude of a signal via the analytic
/// signal: the input as the real part, its Hilbert transform as the
/// imaginary part, magnitude per sample.
///
/// The transform runs over the whole buffer in the frequency domain,
/// so edge effects at the very start and end are tolerated. Output has
/// the same length as the input and every value is non-negative.
pub fn envelope(signal: &[f32]) -> Vec<f32> {
    if signal.is_empty() {
        return Vec::new();
    }
    let n = signal.len();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut buffer: Vec<Complex<f32>> =
        signal.iter().map(|&s| Complex::new(s, 0.0)).collect();
    fft.process(&mut buffer);

    // Analytic signal: double the positive frequencies, zero the
    // negative ones. DC (and Nyquist, for even lengths) keep unit
    // weight.
    let half = n / 2;
    if n % 2 == 0 {
        for bin in &mut buffer[1..half] {
            *bin *= 2.0;
        }
    } else {
        for bin in &mut buffer[1..=half] {
            *bin *= 2.0;
        }
    }
    for bin in &mut buffer[half + 1..] {
        *bin = Complex::new(0.0, 0.0);
    }

    ifft.process(&mut buffer);
    let scale = 1.0 / n as f32;
    buffer.iter().map(|c| c.norm() * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(envelope(&[]).is_empty());
    }

    #[test]
    fn output_is_same_length_and_non_negative() {
        let signal: Vec<f32> = (0..1000)
            .map(|i| (2.0 * std::f32::consts::PI * 600.0 * i as f32 / 8000.0).sin())
            .collect();
        let env = envelope(&signal);
        assert_eq!(env.len(), signal.len());
        assert!(env.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn tracks_sine_amplitude() {
        let amplitude = 0.8;
        let signal: Vec<f32> = (0..8000)
            .map(|i| {
                amplitude * (2.0 * std::f32::consts::PI * 600.0 * i as f32 / 8000.0).sin()
            })
            .collect();
        let env = envelope(&signal);
        // Away from the buffer edges the envelope sits at the carrier
        // amplitude, not at the oscillating waveform.
        for &v in &env[1000..7000] {
            assert!((v - amplitude).abs() < 0.05, "envelope value was {v}");
        }
    }

    #[test]
    fn flattens_gated_tone_into_plateaus() {
        // 0.1 s on, 0.1 s off at 8 kHz.
        let signal: Vec<f32> = (0..1600)
            .map(|i| {
                if i < 800 {
                    (2.0 * std::f32::consts::PI * 600.0 * i as f32 / 8000.0).sin()
                } else {
                    0.0
                }
            })
            .collect();
        let env = envelope(&signal);
        let on_mean = env[100..700].iter().sum::<f32>() / 600.0;
        let off_mean = env[900..1500].iter().sum::<f32>() / 600.0;
        assert!(on_mean > 5.0 * off_mean);
    }
}
