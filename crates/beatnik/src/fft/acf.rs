//! Unbiased autocorrelation via zero-padded real FFT.

use super::real_fft::RealFft;
use crate::config::{ACF_BINS, ACF_SIZE, ODF_SIZE};
use rustfft::num_complex::Complex32;

/// Computes the unbiased autocorrelation of an `ODF_SIZE`-length frame in
/// place, via a zero-padded real FFT of size `ACF_SIZE = 2 * ODF_SIZE`.
pub struct Acf {
    fft: RealFft<ACF_SIZE, ACF_BINS>,
}

impl Acf {
    pub fn new() -> Self {
        Self { fft: RealFft::new() }
    }

    /// `frame[k] <- |ifft(|fft(zero_pad(frame))|^2)[k]| / (ODF_SIZE * (ODF_SIZE - k))`
    /// for `k in [0, ODF_SIZE)`.
    pub fn compute(&self, frame: &mut [f32; ODF_SIZE]) {
        let mut padded = [0.0f32; ACF_SIZE];
        padded[..ODF_SIZE].copy_from_slice(frame);

        let mut bins = [Complex32::new(0.0, 0.0); ACF_BINS];
        self.fft.forward(&padded, &mut bins);
        for bin in bins.iter_mut() {
            *bin = Complex32::new(bin.norm_sqr(), 0.0);
        }

        let mut time = [0.0f32; ACF_SIZE];
        self.fft.backward(&bins, &mut time);

        for k in 0..ODF_SIZE {
            let denom = (ODF_SIZE * (ODF_SIZE - k)) as f32;
            frame[k] = time[k].abs() / denom;
        }
    }
}

impl Default for Acf {
    fn default() -> Self {
        Self::new()
    }
}
