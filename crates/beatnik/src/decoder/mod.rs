//! Period decoder: adaptive threshold -> autocorrelation -> comb filter ->
//! adaptive threshold -> Viterbi, yielding one period hypothesis per decode
//! window.

mod viterbi;

use crate::config::{
    COMBED_SIZE, MIN_PERIOD, ODF_SIZE, THRESHOLD_RADIUS, VITERBI_OFFSET, VITERBI_RADIUS,
    VITERBI_SIZE,
};
use crate::fft::Acf;
use crate::math::{adaptive_threshold, adaptive_threshold_in_place, comb_filter};
use viterbi::Viterbi;

/// Turns a linearised ODF history frame into a single period-hop estimate.
///
/// The Viterbi stage carries its posterior across calls, so successive
/// decode windows refine one ongoing belief rather than starting fresh.
pub struct PeriodDecoder {
    acf: Acf,
    viterbi: Viterbi<VITERBI_SIZE, VITERBI_RADIUS>,
}

impl PeriodDecoder {
    pub fn new() -> Self {
        Self {
            acf: Acf::new(),
            viterbi: Viterbi::new(),
        }
    }

    /// Returns a period hypothesis in `[MIN_PERIOD, MAX_PERIOD)`, measured
    /// in ODF hops.
    pub fn calculate_period(&mut self, odf: &[f32; ODF_SIZE]) -> usize {
        let mut odf_frame = [0.0f32; ODF_SIZE];
        adaptive_threshold(odf, &mut odf_frame, THRESHOLD_RADIUS);

        self.acf.compute(&mut odf_frame);

        let mut combed_frame = [0.0f32; COMBED_SIZE];
        comb_filter(&odf_frame, &mut combed_frame);
        adaptive_threshold_in_place(&mut combed_frame, THRESHOLD_RADIUS);

        let mut viterbi_input = [0.0f32; VITERBI_SIZE];
        viterbi_input.copy_from_slice(&combed_frame[VITERBI_OFFSET..VITERBI_OFFSET + VITERBI_SIZE]);

        let period = self.viterbi.decode(&viterbi_input) + MIN_PERIOD;
        log::debug!("decoder: new period hypothesis = {period} hops");
        period
    }
}

impl Default for PeriodDecoder {
    fn default() -> Self {
        Self::new()
    }
}
