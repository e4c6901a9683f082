//! Spectral power-rise onset detection function.

use crate::config::{FFT_BINS, FFT_HALF, FFT_SIZE, FFT_STEP, ODF_FLOOR};
use crate::fft::{HannWindow, RealFft, NORM_CORRECTION};
use crate::ring::Ring;
use rustfft::num_complex::Complex32;

/// Turns a stream of audio hops into a per-hop novelty scalar.
///
/// Counts the fraction of spectral bins whose magnitude more than doubled
/// since the previous hop, a cheap, gain-robust proxy for a logarithmic
/// spectral flux detector.
pub struct OnsetDetector {
    samples: Ring<f32, FFT_SIZE>,
    window: HannWindow<FFT_SIZE>,
    fft: RealFft<FFT_SIZE, FFT_BINS>,
    magnitudes: [f32; FFT_HALF],
}

impl OnsetDetector {
    pub fn new() -> Self {
        Self {
            samples: Ring::new(),
            window: HannWindow::new(),
            fft: RealFft::new(),
            magnitudes: [0.0; FFT_HALF],
        }
    }

    /// Appends one hop of audio and returns the novelty value for it.
    pub fn process(&mut self, chunk: &[f32; FFT_STEP]) -> f32 {
        for &s in chunk.iter() {
            self.samples.push_back(s);
        }

        let linear = *self.samples.linearise();
        let mut windowed = [0.0f32; FFT_SIZE];
        self.window.apply(&linear, &mut windowed);

        let mut bins = [Complex32::new(0.0, 0.0); FFT_BINS];
        self.fft.forward(&windowed, &mut bins);

        let scale = 1.0 / (FFT_SIZE as f32 * NORM_CORRECTION);
        let mut result = ODF_FLOOR;
        for i in 0..FFT_HALF {
            let mag = bins[i].norm() * scale;
            if mag > 2.0 * self.magnitudes[i] {
                result += 1.0;
            }
            self.magnitudes[i] = mag;
        }
        let novelty = result / FFT_HALF as f32;
        log::trace!("onset detector: novelty = {novelty}");
        novelty
    }

    /// Magnitude spectrum from the most recent `process` call.
    pub fn magnitudes(&self) -> &[f32; FFT_HALF] {
        &self.magnitudes
    }

    pub fn clear(&mut self) {
        self.samples.fill(0.0);
        self.magnitudes = [0.0; FFT_HALF];
    }
}

impl Default for OnsetDetector {
    fn default() -> Self {
        Self::new()
    }
}
