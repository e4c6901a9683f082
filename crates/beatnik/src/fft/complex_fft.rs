//! Complex FFT kernel, planned once via `rustfft` and reused for every
//! subsequent transform, the way `qm_tempo.rs` plans its onset-detection
//! FFT once per analysis run rather than per frame.

use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// A complex FFT of fixed size `N`, with separately planned forward and
/// inverse transforms.
pub struct ComplexFft<const N: usize> {
    forward: Arc<dyn Fft<f32>>,
    inverse: Arc<dyn Fft<f32>>,
}

impl<const N: usize> ComplexFft<N> {
    pub fn new() -> Self {
        assert!(N > 0, "FFT size must be non-zero");
        let mut planner = FftPlanner::new();
        Self {
            forward: planner.plan_fft_forward(N),
            inverse: planner.plan_fft_inverse(N),
        }
    }

    /// Unscaled forward transform: `X[n] = sum_k x[k] * exp(-2*pi*i*k*n/N)`.
    pub fn forward(&self, data: &mut [Complex32; N]) {
        self.forward.process(data);
    }

    /// Unscaled inverse transform: `x[k] = sum_n X[n] * exp(2*pi*i*k*n/N)`.
    /// `rustfft` applies no `1/N` scaling in either direction; callers
    /// apply whatever normalisation they need.
    pub fn inverse(&self, data: &mut [Complex32; N]) {
        self.inverse.process(data);
    }
}

impl<const N: usize> Default for ComplexFft<N> {
    fn default() -> Self {
        Self::new()
    }
}
