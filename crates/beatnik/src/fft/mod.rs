//! Forward real FFT, its complex kernel, the Hann window, and the
//! autocorrelation stage built on top of it.

mod acf;
mod complex_fft;
mod hann;
mod real_fft;

pub use acf::Acf;
pub use complex_fft::ComplexFft;
pub use hann::{HannWindow, NORM_CORRECTION};
pub use real_fft::RealFft;
