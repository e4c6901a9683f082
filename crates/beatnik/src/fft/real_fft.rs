//! Real-to-complex FFT wrapper.
//!
//! A half-size complex FFT plus a Hermitian-fold post-pass is the usual way
//! to save work here, but it is easy to get a sign or indexing step subtly
//! wrong in that fold. This version gets the same numeric contract (forward
//! bin `n` of a unit impulse at `k` is `exp(-2*pi*i*k*n/N)`; a forward then
//! backward round trip scales the input by `N/2`) from an explicit
//! conjugate-symmetry reconstruction instead, at the cost of running the
//! underlying complex FFT at full size `N` rather than `N/2`.

use super::complex_fft::ComplexFft;
use rustfft::num_complex::Complex32;

/// Real FFT over `N` real samples, producing `BINS` complex bins.
///
/// `BINS` must equal `N/2 + 1`; both are named `const` parameters (never an
/// inline `N/2+1` expression) so every call site ties them together
/// through the named constants in [`crate::config`].
pub struct RealFft<const N: usize, const BINS: usize> {
    cfft: ComplexFft<N>,
}

impl<const N: usize, const BINS: usize> RealFft<N, BINS> {
    pub fn new() -> Self {
        assert_eq!(BINS, N / 2 + 1, "BINS must equal N/2 + 1");
        assert!(N % 4 == 0, "real FFT size must be divisible by 4");
        Self {
            cfft: ComplexFft::new(),
        }
    }

    /// Forward transform of `N` real samples into `BINS` complex bins.
    pub fn forward(&self, input: &[f32; N], output: &mut [Complex32; BINS]) {
        let mut data: [Complex32; N] = std::array::from_fn(|i| Complex32::new(input[i], 0.0));
        self.cfft.forward(&mut data);
        output.copy_from_slice(&data[..BINS]);
    }

    /// Backward transform of `BINS` complex bins (the lower half of a real
    /// signal's Hermitian spectrum) into `N` real samples.
    pub fn backward(&self, input: &[Complex32; BINS], output: &mut [f32; N]) {
        let mut data: [Complex32; N] = std::array::from_fn(|k| {
            if k < BINS {
                input[k]
            } else {
                input[N - k].conj()
            }
        });
        self.cfft.inverse(&mut data);
        for (o, d) in output.iter_mut().zip(data.iter()) {
            *o = d.re * 0.5;
        }
    }
}

impl<const N: usize, const BINS: usize> Default for RealFft<N, BINS> {
    fn default() -> Self {
        Self::new()
    }
}
