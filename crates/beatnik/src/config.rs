//! Compile-time sizing for the engine.
//!
//! Every cache table (the Viterbi kernel, the tracker's skewed-window cache)
//! is sized from these constants, so they are named `const` items rather
//! than fields on a runtime config struct: the engine is a single
//! instantiation of the defaults below, not a generic type parameterised
//! over them.

/// Size of the onset detector's analysis window, in audio samples.
pub const FFT_SIZE: usize = 1024;
/// Hop between successive onset-detector FFTs, in audio samples.
pub const FFT_STEP: usize = 128;
/// Capacity of the ODF history ring.
pub const ODF_SIZE: usize = 2048;
/// Number of hops between successive period-decoder runs.
pub const ODF_STEP: usize = 128;
/// Decimation factor applied by the decoder's comb filter.
pub const DECIMATION: usize = 4;

/// Radius of the boxed-mean adaptive threshold used throughout the decoder.
pub const THRESHOLD_RADIUS: usize = 7;

/// `combed_size = ODF_SIZE / DECIMATION`.
pub const COMBED_SIZE: usize = ODF_SIZE / DECIMATION;
/// `viterbi_size = COMBED_SIZE / 2`.
pub const VITERBI_SIZE: usize = COMBED_SIZE / 2;
/// Offset of the Viterbi input window within the combed frame.
pub const VITERBI_OFFSET: usize = COMBED_SIZE - VITERBI_SIZE;
/// Half-width of the Viterbi transition kernel's finite support.
pub const VITERBI_RADIUS: usize = VITERBI_SIZE / 2;

/// Shortest period (in ODF hops) either the decoder or the tracker will report.
pub const MIN_PERIOD: usize = COMBED_SIZE - VITERBI_SIZE;
/// One past the longest period (in ODF hops) either component will report.
pub const MAX_PERIOD: usize = COMBED_SIZE;

/// Beats of cumulative-score history the tracker retains.
pub const TRACKER_BEATS: usize = 8;
/// Capacity of the tracker's cumulative-score and backlink rings.
pub const TRACKER_SIZE: usize = MIN_PERIOD * TRACKER_BEATS;

/// Number of distinct period hypotheses the skewed-window cache covers.
pub const PERIOD_RANGE: usize = MIN_PERIOD;
/// Row length of the skewed-window cache.
pub const ROW_SIZE: usize = 2 * MAX_PERIOD;

/// Exponential smoothing coefficient applied to the tracker's running score.
pub const ALPHA: f32 = 0.9;

/// Lower bound of the folded tempo range, in BPM.
pub const MIN_TEMPO: f32 = 90.0;
/// Upper bound (exclusive) of the folded tempo range, in BPM.
pub const MAX_TEMPO: f32 = 180.0;

/// ODF floor applied to every onset-detector sample to keep downstream
/// normalisation away from exact-zero input.
pub const ODF_FLOOR: f32 = 1e-6;

/// Value `clear()` seeds the ODF ring with, to avoid first-frame
/// degeneracies right after a reset.
pub const ODF_SEED: f32 = 0.1;

/// Number of complex bins a real FFT of size `FFT_SIZE` produces.
pub const FFT_BINS: usize = FFT_SIZE / 2 + 1;
/// Number of magnitude bins the onset detector tracks (Nyquist excluded).
pub const FFT_HALF: usize = FFT_SIZE / 2;

/// Size of the zero-padded real FFT the autocorrelation stage runs.
pub const ACF_SIZE: usize = 2 * ODF_SIZE;
/// Number of complex bins `ACF_SIZE`'s real FFT produces.
pub const ACF_BINS: usize = ACF_SIZE / 2 + 1;

const _: () = assert!(FFT_SIZE.is_power_of_two());
const _: () = assert!(ODF_SIZE % DECIMATION == 0);
const _: () = assert!(VITERBI_OFFSET == MIN_PERIOD);
const _: () = assert!(ACF_SIZE.is_power_of_two());
