//! Top-level engine: wires the onset detector, period decoder, and beat
//! tracker together and converts period hops into a folded BPM estimate.

use crate::config::{FFT_HALF, FFT_STEP, MAX_TEMPO, MIN_TEMPO, ODF_SEED, ODF_SIZE, ODF_STEP};
use crate::decoder::PeriodDecoder;
use crate::error::BeatnikError;
use crate::onset::OnsetDetector;
use crate::ring::Ring;
use crate::tracker::Tracker;

/// Real-time, constant-memory beat-tracking engine.
///
/// Owns every buffer it needs up front; after construction, driving it via
/// [`Engine::process`] performs no heap allocation. Not `Sync`; callers
/// must serialise access to a single instance, typically from one audio
/// callback thread.
pub struct Engine {
    onset_detector: OnsetDetector,
    decoder: PeriodDecoder,
    tracker: Tracker,
    odf_buffer: Ring<f32, ODF_SIZE>,
    frames_per_minute: f32,
    counter: usize,
}

impl Engine {
    /// Builds an engine for the given sample rate.
    ///
    /// # Panics
    /// Panics if `sample_rate` is not finite and positive. That is a
    /// programmer error (a hardcoded or already-validated constant), not
    /// caller data; use [`Engine::try_new`] when the sample rate comes
    /// from an untrusted source (a file header, a device query).
    pub fn new(sample_rate: f32) -> Self {
        Self::try_new(sample_rate).expect("invalid sample rate")
    }

    /// Fallible counterpart of [`Engine::new`] for untrusted sample rates.
    pub fn try_new(sample_rate: f32) -> Result<Self, BeatnikError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(BeatnikError::InvalidSampleRate(sample_rate));
        }
        log::debug!("beatnik engine constructed at {sample_rate} Hz");
        Ok(Self {
            onset_detector: OnsetDetector::new(),
            decoder: PeriodDecoder::new(),
            tracker: Tracker::new(),
            odf_buffer: Ring::new(),
            frames_per_minute: 60.0 * sample_rate / FFT_STEP as f32,
            counter: 0,
        })
    }

    /// Feeds one hop of `FFT_STEP` audio samples through the pipeline.
    ///
    /// Returns `true` when a new tempo estimate is ready to be read via
    /// [`Engine::estimate_tempo`].
    pub fn process(&mut self, audio: &[f32; FFT_STEP]) -> bool {
        let sample = self.onset_detector.process(audio);
        self.odf_buffer.push_back(sample);
        self.tracker.update_score(sample);

        self.counter += 1;
        if self.counter >= ODF_STEP {
            self.counter = 0;
            let linearised = *self.odf_buffer.linearise();
            let period = self.decoder.calculate_period(&linearised);
            self.tracker.set_period_guess(period);
        }

        self.tracker.new_estimate_expected()
    }

    /// Current tempo estimate, folded into `[MIN_TEMPO, MAX_TEMPO)`.
    pub fn estimate_tempo(&mut self) -> f32 {
        let period = self.tracker.estimate_period();
        let mut bpm = self.frames_per_minute / period;
        while bpm > MAX_TEMPO {
            bpm /= 2.0;
        }
        while bpm < MIN_TEMPO {
            bpm *= 2.0;
        }
        bpm
    }

    /// Most recent `ODF_SIZE`-sample ODF history, oldest first.
    pub fn get_odf_buffer(&mut self) -> &[f32; ODF_SIZE] {
        self.odf_buffer.linearise()
    }

    /// Magnitude spectrum from the most recent hop.
    pub fn get_fft_magnitudes(&self) -> &[f32; FFT_HALF] {
        self.onset_detector.magnitudes()
    }

    /// Resets the tracker and ODF history, but not the onset detector or
    /// period decoder's running state.
    pub fn clear(&mut self) {
        self.counter = 0;
        self.odf_buffer.fill(ODF_SEED);
        self.tracker.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_sample_rates() {
        assert!(Engine::try_new(f32::NAN).is_err());
        assert!(Engine::try_new(0.0).is_err());
        assert!(Engine::try_new(-48000.0).is_err());
    }

    #[test]
    #[should_panic]
    fn new_panics_on_invalid_sample_rate() {
        Engine::new(0.0);
    }

    #[test]
    fn silence_never_panics_and_yields_a_folded_tempo() {
        let mut engine = Engine::new(48_000.0);
        let hop = [0.0f32; FFT_STEP];
        let mut ready = false;
        for _ in 0..(ODF_STEP * 4) {
            ready |= engine.process(&hop);
        }
        assert!(ready);
        let bpm = engine.estimate_tempo();
        assert!(bpm.is_finite());
        assert!(bpm >= MIN_TEMPO && bpm < MAX_TEMPO);
    }

    #[test]
    fn clear_reseeds_the_odf_buffer() {
        let mut engine = Engine::new(48_000.0);
        let hop = [0.0f32; FFT_STEP];
        for _ in 0..ODF_STEP {
            engine.process(&hop);
        }
        engine.clear();
        assert!(engine.get_odf_buffer().iter().all(|&v| v == ODF_SEED));
    }
}
