//! Beat tracker: cumulative-score dynamic programming over the ODF stream,
//! locking phase onto beats and exposing the period via backlink traversal.

mod skewed_window;

use crate::config::{ALPHA, MAX_PERIOD, MIN_PERIOD, ROW_SIZE, TRACKER_SIZE};
use crate::ring::Ring;
use skewed_window::SkewedWindow;

/// Tracks cumulative beat-aligned score and the backlinks needed to recover
/// a period estimate from it.
pub struct Tracker {
    window: SkewedWindow,
    scores: Ring<f32, TRACKER_SIZE>,
    backlinks: Ring<usize, TRACKER_SIZE>,
    /// `0` means "no period hypothesis yet".
    period_guess: usize,
    counter: usize,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            window: SkewedWindow::new(),
            scores: Ring::new(),
            backlinks: Ring::new(),
            period_guess: 0,
            counter: 0,
        }
    }

    fn is_valid_period(period: usize) -> bool {
        period >= MIN_PERIOD && period < MAX_PERIOD
    }

    pub fn set_period_guess(&mut self, period: usize) {
        debug_assert!(Self::is_valid_period(period), "period out of range");
        log::debug!("tracker: period guess set to {period} hops");
        self.period_guess = period;
    }

    /// Folds one ODF sample into the cumulative-score history.
    ///
    /// Returns `false` without touching the score/backlink rings while no
    /// period hypothesis has been set yet, matching the upstream engine's
    /// warm-up behaviour.
    pub fn update_score(&mut self, odf_sample: f32) -> bool {
        if !Self::is_valid_period(self.period_guess) {
            return false;
        }

        let row_len = ROW_SIZE.min(self.scores.len());
        let (last_score, last_lag) = self
            .window
            .find_max_score(self.period_guess, self.scores.rbegin().take(row_len));

        let new_score = (1.0 - ALPHA) * odf_sample + ALPHA * last_score;
        self.scores.push_back(new_score);
        self.backlinks.push_back(last_lag);
        self.counter += 1;

        self.new_estimate_expected()
    }

    pub fn new_estimate_expected(&self) -> bool {
        Self::is_valid_period(self.period_guess) && self.counter > self.period_guess
    }

    /// Recovers the period estimate by walking backlinks from the most
    /// recent high-scoring beat; resets the hop counter.
    ///
    /// Returns `MIN_PERIOD` if the backlink chain is degenerate (e.g. an
    /// all-zero score history) rather than dividing zero by zero.
    pub fn estimate_period(&mut self) -> f32 {
        self.counter = 0;

        let mut max_index = 0usize;
        let mut max_value = f32::MIN;
        for i in 0..self.period_guess {
            let v = self.scores[TRACKER_SIZE - 1 - i];
            if v > max_value {
                max_value = v;
                max_index = i;
            }
        }
        let mut last_beat = TRACKER_SIZE - 1 - max_index;

        let mut periods_sum = 0usize;
        let mut periods_count = 0usize;
        while last_beat > self.backlinks[last_beat] {
            let lag = self.backlinks[last_beat];
            if lag == 0 {
                break;
            }
            periods_sum += lag;
            periods_count += 1;
            last_beat -= lag;
        }

        if periods_count == 0 {
            return MIN_PERIOD as f32;
        }
        periods_sum as f32 / periods_count as f32
    }

    pub fn clear(&mut self) {
        self.period_guess = 0;
        self.counter = 0;
        self.scores.fill(0.0);
        self.backlinks.fill(0);
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
