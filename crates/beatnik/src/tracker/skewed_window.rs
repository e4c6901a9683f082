//! Precomputed skewed transition window used by the beat tracker to score
//! candidate beat lags against a period hypothesis.

use crate::config::{MAX_PERIOD, MIN_PERIOD, PERIOD_RANGE, ROW_SIZE};

const TIGHTNESS: f32 = 5.0;

/// `cache[period - MIN_PERIOD][lag - 1]` is the window's weight for that
/// `(period, lag)` pair; zero outside `lag in [period/2, 2*period]`.
pub struct SkewedWindow {
    cache: [[f32; ROW_SIZE]; PERIOD_RANGE],
}

impl SkewedWindow {
    pub fn new() -> Self {
        let mut cache = [[0.0f32; ROW_SIZE]; PERIOD_RANGE];
        for period in MIN_PERIOD..MAX_PERIOD {
            let row = &mut cache[period - MIN_PERIOD];
            let min_lag = period / 2;
            let max_lag = 2 * period;
            for lag in min_lag..=max_lag {
                row[lag - 1] = window_value(period, lag);
            }
        }
        Self { cache }
    }

    /// Scores up to `ROW_SIZE` values from `scores` (newest first) against
    /// the row for `period`, returning `(max_value, index_of_max)`.
    pub fn find_max_score(
        &self,
        period: usize,
        scores: impl Iterator<Item = f32>,
    ) -> (f32, usize) {
        let row = &self.cache[period - MIN_PERIOD];
        let mut max_value = f32::MIN;
        let mut max_index = 0usize;
        for (k, score) in scores.take(ROW_SIZE).enumerate() {
            let product = score * row[k];
            if product > max_value {
                max_value = product;
                max_index = k;
            }
        }
        (max_value, max_index)
    }
}

impl Default for SkewedWindow {
    fn default() -> Self {
        Self::new()
    }
}

fn window_value(period: usize, lag: usize) -> f32 {
    let x = lag as f32 / period as f32;
    let inner = TIGHTNESS * (2.0 - x).ln();
    (-0.5 * inner * inner).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_when_lag_equals_period() {
        let period = MIN_PERIOD + 4;
        assert_eq!(window_value(period, period), 1.0);
    }

    #[test]
    fn vanishes_at_twice_the_period() {
        let period = MIN_PERIOD + 4;
        assert_eq!(window_value(period, 2 * period), 0.0);
    }

    #[test]
    fn rows_are_zero_outside_their_support() {
        let w = SkewedWindow::new();
        let period = MIN_PERIOD;
        let row = &w.cache[period - MIN_PERIOD];
        assert_eq!(row[0], 0.0); // lag = 1, below period/2
    }
}
