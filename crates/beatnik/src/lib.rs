//! beatnik
//!
//! Real-time, constant-memory beat-tracking and tempo-estimation engine.
//! Consumes successive fixed-size hops of mono `f32` PCM audio and, at
//! regular intervals, emits an estimate of the current tempo along with a
//! flag marking when a fresh estimate became available.
//!
//! # Pipeline
//!
//! - An onset detection function turns each audio hop into a spectral
//!   novelty scalar ([`onset::OnsetDetector`]).
//! - A period decoder runs autocorrelation, a harmonic comb filter, and a
//!   single-step Viterbi decode over the novelty history to produce a
//!   period hypothesis ([`decoder::PeriodDecoder`]).
//! - A beat tracker locks phase onto beats via cumulative-score dynamic
//!   programming and recovers the period estimate from its backlinks
//!   ([`tracker::Tracker`]).
//!
//! [`Engine`] wires these together. It performs no heap allocation after
//! construction, runs single-threaded, and is total: `process` and
//! `estimate_tempo` never fail. The one fallible surface is constructing an
//! engine for an untrusted sample rate; see [`Engine::try_new`].

pub mod config;
mod decoder;
mod engine;
mod error;
mod fft;
mod math;
mod onset;
mod ring;
mod tracker;

pub use engine::Engine;
pub use error::BeatnikError;
