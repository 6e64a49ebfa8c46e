//! Step-through and timed playback over a step sequence
//!
//! The controller is a small state machine:
//!
//! ```text
//!   Idle --load--> Stepping --run--> Running
//!    ^                |  ^              |
//!    +-----clear------+  +--last tick---+
//! ```
//!
//! Every transition returns the control signals a presentation layer needs
//! to enable or disable its step/run buttons. Calls that are not allowed in
//! the current state or position are ignored and return no signals.

use crate::dialog::speed::SpeedConfig;
use crate::io::error::{Result, ViewerError};
use crate::maze::frame::Frame;
use crate::playback::scheduler::{Scheduler, TimerId};
use crate::playback::sequence::StepSequence;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No sequence loaded
    Idle,
    /// Sequence loaded, manual stepping available
    Stepping,
    /// Periodic ticks advance the sequence, manual controls disabled
    Running,
}

/// Change a presentation layer should reflect on its controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Step-forward control enabled or disabled
    ForwardEnabled(bool),
    /// Step-back control enabled or disabled
    BackEnabled(bool),
    /// Run, regenerate, clear and solve controls enabled or disabled
    ManualControlsEnabled(bool),
    /// The frame at this index is now current
    FrameChanged(usize),
}

/// Snapshot of which controls are usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Step forward / jump to end
    pub forward: bool,
    /// Step back / jump to start
    pub back: bool,
    /// Start timed playback
    pub run: bool,
    /// Generate, clear and solve
    pub regenerate: bool,
}

/// Playback state machine driven by manual commands and scheduler ticks
#[derive(Debug)]
pub struct PlaybackController<S: Scheduler> {
    scheduler: S,
    sequence: Option<StepSequence>,
    state: PlaybackState,
    timer: Option<TimerId>,
}

impl<S: Scheduler> PlaybackController<S> {
    /// Idle controller registering its ticks with `scheduler`
    pub const fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            sequence: None,
            state: PlaybackState::Idle,
            timer: None,
        }
    }

    /// Current state
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Scheduler receiving tick registrations
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Loaded sequence
    pub const fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    /// Current frame index, if a sequence is loaded
    pub fn current_index(&self) -> Option<usize> {
        self.sequence.as_ref().map(StepSequence::current_index)
    }

    /// Decoded current frame
    ///
    /// # Errors
    ///
    /// Returns an error if no sequence is loaded or the frame is malformed.
    pub fn current_frame(&self) -> Result<&Frame> {
        self.sequence
            .as_ref()
            .ok_or(ViewerError::NoSequenceLoaded)?
            .current_frame()
    }

    /// Which controls are usable in the current state and position
    pub fn controls(&self) -> Controls {
        match (self.state, self.sequence.as_ref()) {
            (PlaybackState::Stepping, Some(sequence)) => Controls {
                forward: sequence.current_index() < sequence.last_index(),
                back: sequence.current_index() > 0,
                run: true,
                regenerate: true,
            },
            (PlaybackState::Running, _) => Controls {
                forward: false,
                back: false,
                run: false,
                regenerate: false,
            },
            _ => Controls {
                forward: false,
                back: false,
                run: false,
                regenerate: true,
            },
        }
    }

    /// Replace the sequence and show its first frame
    ///
    /// A running playback is cancelled first.
    pub fn load_sequence(&mut self, mut sequence: StepSequence) -> Vec<ControlSignal> {
        let mut signals = Vec::new();
        if self.state == PlaybackState::Running {
            self.cancel_timer();
            signals.push(ControlSignal::ManualControlsEnabled(true));
        }

        sequence.rewind();
        let len = sequence.len();
        self.sequence = Some(sequence);
        self.state = PlaybackState::Stepping;

        tracing::debug!(frames = len, "playback loaded sequence");
        signals.extend(self.position_signals());
        signals
    }

    /// Advance one frame
    pub fn step_forward(&mut self) -> Vec<ControlSignal> {
        match self.stepping_position() {
            Some((index, last)) if index < last => self.move_to(index + 1),
            _ => self.rejected("step_forward"),
        }
    }

    /// Go back one frame
    pub fn step_back(&mut self) -> Vec<ControlSignal> {
        match self.stepping_position() {
            Some((index, _)) if index > 0 => self.move_to(index - 1),
            _ => self.rejected("step_back"),
        }
    }

    /// Show the first frame
    pub fn jump_to_start(&mut self) -> Vec<ControlSignal> {
        match self.stepping_position() {
            Some(_) => self.move_to(0),
            None => self.rejected("jump_to_start"),
        }
    }

    /// Show the last frame
    pub fn jump_to_end(&mut self) -> Vec<ControlSignal> {
        match self.stepping_position() {
            Some((_, last)) => self.move_to(last),
            None => self.rejected("jump_to_end"),
        }
    }

    /// Replay the sequence from the first frame at `speed` steps per second
    ///
    /// Manual controls are disabled until the last frame is reached. A
    /// single-frame sequence finishes immediately.
    pub fn run(&mut self, speed: SpeedConfig) -> Vec<ControlSignal> {
        let Some(last) = self.stepping_position().map(|(_, last)| last) else {
            return self.rejected("run");
        };

        if let Some(sequence) = self.sequence.as_mut() {
            sequence.rewind();
        }
        self.state = PlaybackState::Running;
        let mut signals = vec![
            ControlSignal::FrameChanged(0),
            ControlSignal::ManualControlsEnabled(false),
            ControlSignal::ForwardEnabled(false),
            ControlSignal::BackEnabled(false),
        ];

        if last == 0 {
            signals.extend(self.finish_run());
            return signals;
        }

        let interval = speed.tick_interval();
        self.timer = Some(self.scheduler.schedule_periodic(interval));
        tracing::debug!(
            speed = speed.steps_per_second(),
            interval_ms = interval.as_millis(),
            "playback started"
        );
        signals
    }

    /// Advance a running playback by one frame
    ///
    /// Reaching the last frame cancels the schedule and returns to stepping
    /// with manual controls enabled again. Ticks outside a run are ignored.
    pub fn tick(&mut self) -> Vec<ControlSignal> {
        if self.state != PlaybackState::Running {
            return self.rejected("tick");
        }
        let Some(sequence) = self.sequence.as_mut() else {
            return self.rejected("tick");
        };

        let mut signals = Vec::new();
        let last = sequence.last_index();
        let index = sequence.current_index();
        if index < last && sequence.set_current_index(index + 1).is_ok() {
            signals.push(ControlSignal::FrameChanged(index + 1));
        }

        if sequence.current_index() == last {
            signals.extend(self.finish_run());
        }
        signals
    }

    /// Stop a running playback at the current frame
    pub fn stop(&mut self) -> Vec<ControlSignal> {
        if self.state != PlaybackState::Running {
            return self.rejected("stop");
        }
        self.finish_run()
    }

    /// Discard the sequence and return to idle
    pub fn clear(&mut self) -> Vec<ControlSignal> {
        let mut signals = Vec::new();
        if self.state == PlaybackState::Running {
            self.cancel_timer();
            signals.push(ControlSignal::ManualControlsEnabled(true));
        }

        self.sequence = None;
        self.state = PlaybackState::Idle;
        tracing::debug!("playback cleared");

        signals.extend([
            ControlSignal::ForwardEnabled(false),
            ControlSignal::BackEnabled(false),
        ]);
        signals
    }

    /// `(current, last)` when manual stepping is allowed
    fn stepping_position(&self) -> Option<(usize, usize)> {
        if self.state != PlaybackState::Stepping {
            return None;
        }
        self.sequence
            .as_ref()
            .map(|sequence| (sequence.current_index(), sequence.last_index()))
    }

    fn move_to(&mut self, index: usize) -> Vec<ControlSignal> {
        let Some(sequence) = self.sequence.as_mut() else {
            return Vec::new();
        };
        if let Err(error) = sequence.set_current_index(index) {
            tracing::warn!(%error, "playback position rejected");
            return Vec::new();
        }
        self.position_signals()
    }

    fn position_signals(&self) -> Vec<ControlSignal> {
        let Some(sequence) = self.sequence.as_ref() else {
            return Vec::new();
        };
        let index = sequence.current_index();
        vec![
            ControlSignal::FrameChanged(index),
            ControlSignal::ForwardEnabled(index < sequence.last_index()),
            ControlSignal::BackEnabled(index > 0),
        ]
    }

    fn finish_run(&mut self) -> Vec<ControlSignal> {
        self.cancel_timer();
        self.state = PlaybackState::Stepping;
        tracing::debug!(index = ?self.current_index(), "playback finished");

        let mut signals = vec![ControlSignal::ManualControlsEnabled(true)];
        signals.extend(
            self.position_signals()
                .into_iter()
                .filter(|signal| !matches!(signal, ControlSignal::FrameChanged(_))),
        );
        signals
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer);
        }
    }

    fn rejected(&self, operation: &'static str) -> Vec<ControlSignal> {
        tracing::debug!(operation, state = ?self.state, "playback command ignored");
        Vec::new()
    }
}
