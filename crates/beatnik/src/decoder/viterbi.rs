//! Single-step Viterbi decoder over a candidate-period axis.
//!
//! `delta` is genuine cross-call state: it is seeded to `1` once at
//! construction and then carried from one `decode` call to the next, so
//! each decode window is one forward step of an ongoing recurrence rather
//! than an isolated computation. Each call reads the prior posterior into
//! a local `delta_prev` and writes the new one into `self.delta`, keeping
//! the contract simple: posterior equals prior times emission times the
//! max over predecessors of the transition kernel.

use crate::math::normalise;

/// Decodes one frame of width `N` per call against a Gaussian transition
/// kernel of half-width `RADIUS = N/2`, carrying its posterior forward.
pub struct Viterbi<const N: usize, const RADIUS: usize> {
    /// `kernel[d] = exp(-d^2 / (2 * sigma^2))`, `sigma = RADIUS / 4`.
    kernel: [f32; RADIUS],
    delta: [f32; N],
}

impl<const N: usize, const RADIUS: usize> Viterbi<N, RADIUS> {
    pub fn new() -> Self {
        assert_eq!(RADIUS, N / 2, "RADIUS must equal N / 2");
        let sigma = RADIUS as f32 / 4.0;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let kernel = std::array::from_fn(|d| {
            let mu_sq = (d * d) as f32;
            (-mu_sq / two_sigma_sq).exp()
        });
        Self {
            kernel,
            delta: [1.0; N],
        }
    }

    fn kernel_at(&self, i: usize, j: usize) -> f32 {
        let d = i.abs_diff(j);
        if d >= RADIUS {
            0.0
        } else {
            self.kernel[d]
        }
    }

    /// Advances the recurrence by one frame and returns the backlink chosen
    /// for the frame's most probable ending state.
    pub fn decode(&mut self, input: &[f32; N]) -> usize {
        let delta_prev = self.delta;
        let mut psi = [0usize; N];

        for i in 0..N {
            let mut max_value = f32::MIN;
            let mut max_index = 0usize;
            for j in 0..N {
                let product = delta_prev[j] * self.kernel_at(i, j);
                if product > max_value {
                    max_value = product;
                    max_index = j;
                }
            }
            psi[i] = max_index;
            self.delta[i] = input[i] * max_value;
        }

        normalise(&mut self.delta);

        let mut best_index = 0usize;
        let mut best_value = f32::MIN;
        for (i, &v) in self.delta.iter().enumerate() {
            if v > best_value {
                best_value = v;
                best_index = i;
            }
        }
        psi[best_index]
    }
}

impl<const N: usize, const RADIUS: usize> Default for Viterbi<N, RADIUS> {
    fn default() -> Self {
        Self::new()
    }
}
