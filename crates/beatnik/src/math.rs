//! Pure array transforms shared by the decoder and tracker: boxed-mean
//! adaptive threshold, harmonic comb filter, positive-sum normalisation.
//!
//! None of these allocate; callers own the scratch buffers and pass them in
//! as fixed-size arrays or slices.

/// Arithmetic mean of a non-empty slice.
///
/// # Panics (debug only)
/// Panics if `values` is empty, since a zero-length slice here is a
/// precondition violation in the caller's wiring, not user input.
pub fn mean(values: &[f32]) -> f32 {
    debug_assert!(!values.is_empty(), "mean of an empty slice");
    values.iter().sum::<f32>() / values.len() as f32
}

/// Boxed-mean adaptive threshold: `out[i] = max(0, in[i] - mean(window))`
/// where `window` spans `[max(0, i - radius), min(N, i + radius))`.
///
/// `input` and `output` must be distinct slices of equal length.
pub fn adaptive_threshold(input: &[f32], output: &mut [f32], radius: usize) {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len();
    for i in 0..n {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius).min(n);
        let m = mean(&input[lo..hi]);
        output[i] = (input[i] - m).max(0.0);
    }
}

/// In-place boxed-mean adaptive threshold over a fixed-size array.
///
/// Computes every window mean from the buffer's original contents before
/// writing any output, so the observable result is identical to
/// [`adaptive_threshold`] with distinct input/output slices, even though
/// storage is shared. `N` must be a named `const`, matching the capacity
/// it is applied to.
pub fn adaptive_threshold_in_place<const N: usize>(buf: &mut [f32; N], radius: usize) {
    let means: [f32; N] = std::array::from_fn(|i| {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius).min(N);
        mean(&buf[lo..hi])
    });
    for i in 0..N {
        buf[i] = (buf[i] - means[i]).max(0.0);
    }
}

/// Harmonic comb filter.
///
/// `input.len() % output.len() == 0`; `stage = input.len() / output.len()`.
/// `output[0] = 0`; for `i >= 1`,
/// `output[i] = Σ_{s=1..=stage} mean(input[s·(i-1)+1 ..= s·(i-1)+2s-1])`,
/// i.e. the sum, over every stage `s`, of the boxed mean of half-width
/// `s - 1` centred at `s·i` in `input`. This reinforces integer multiples
/// of a candidate period.
pub fn comb_filter(input: &[f32], output: &mut [f32]) {
    let n_in = input.len();
    let n_out = output.len();
    debug_assert!(n_out > 0 && n_in % n_out == 0);
    let stage = n_in / n_out;

    output[0] = 0.0;
    for i in 1..n_out {
        let mut acc = 0.0;
        for s in 1..=stage {
            let lo = s * (i - 1) + 1;
            let hi = s * (i - 1) + 2 * s - 1;
            acc += mean(&input[lo..=hi]);
        }
        output[i] = acc;
    }
}

/// Divides every element by the sum of the positive parts of the input.
///
/// Undefined for the caller if that sum is zero; internal callers guarantee
/// positivity where this is applied.
pub fn normalise(buf: &mut [f32]) {
    let positive_sum: f32 = buf.iter().copied().map(|v| v.max(0.0)).sum();
    for v in buf.iter_mut() {
        *v /= positive_sum;
    }
}
