//! Step sequences and their playback
//!
//! This module contains:
//! - The list of raw frames loaded from a step log
//! - Tick scheduling for timed playback
//! - The playback state machine

/// Playback state machine and control signals
pub mod controller;
/// Periodic tick registration
pub mod scheduler;
/// Step log splitting and lazy frame decoding
pub mod sequence;

pub use controller::{ControlSignal, Controls, PlaybackController, PlaybackState};
pub use scheduler::{CooperativeScheduler, Scheduler};
pub use sequence::StepSequence;
