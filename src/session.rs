use crate::config::Settings;

/// Phase of the focus/break cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Mode {
    Focus,
    Break,
}

/// Emitted exactly once per mode switch, whether the countdown expired or
/// the user skipped. The caller turns it into the audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseComplete {
    pub finished: Mode,
    pub entered: Mode,
}

/// Countdown state machine for one activation of the timer screen.
///
/// Durations are snapshotted from `Settings` at construction, so editing
/// settings while a session exists never resizes the phase in progress;
/// new values only apply to sessions started afterwards.
#[derive(Debug)]
pub struct Session {
    pub mode: Mode,
    pub remaining_secs: u32,
    pub is_running: bool,
    pub completed_focus_cycles: u32,
    pub sound_enabled: bool,
    focus_secs: u32,
    break_secs: u32,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: Mode::Focus,
            remaining_secs: settings.focus_secs,
            is_running: false,
            completed_focus_cycles: 0,
            sound_enabled: true,
            focus_secs: settings.focus_secs,
            break_secs: settings.break_secs,
        }
    }

    /// Full length of the phase currently counting down.
    pub fn phase_duration_secs(&self) -> u32 {
        match self.mode {
            Mode::Focus => self.focus_secs,
            Mode::Break => self.break_secs,
        }
    }

    pub fn start(&mut self) {
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    pub fn toggle_run(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Consume exactly one elapsed second.
    ///
    /// Ignored while paused; a tick that arrives after the run state
    /// flipped must not corrupt the countdown. Driving the remainder to
    /// zero switches phase before the next tick can be scheduled.
    pub fn tick(&mut self) -> Option<PhaseComplete> {
        if !self.is_running {
            return None;
        }
        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return None;
        }
        self.remaining_secs = 0;
        Some(self.switch_mode())
    }

    /// Flip phase and load the new phase's full duration. Only Focus
    /// completions count toward the cycle total. Run state is untouched.
    pub fn switch_mode(&mut self) -> PhaseComplete {
        let finished = self.mode;
        match self.mode {
            Mode::Focus => {
                self.completed_focus_cycles += 1;
                self.mode = Mode::Break;
                self.remaining_secs = self.break_secs;
            }
            Mode::Break => {
                self.mode = Mode::Focus;
                self.remaining_secs = self.focus_secs;
            }
        }
        PhaseComplete {
            finished,
            entered: self.mode,
        }
    }

    /// Reload the current phase's full duration and stop the countdown.
    /// Mode and cycle count are untouched.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_secs = self.phase_duration_secs();
    }

    /// Jump straight to the next phase, preserving the run state.
    pub fn skip(&mut self) -> PhaseComplete {
        self.remaining_secs = 0;
        self.switch_mode()
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Fraction of the current phase already elapsed, clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        let total = self.phase_duration_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// "MM:SS" readout for the big clock.
    pub fn time_display(&self) -> String {
        crate::util::format_mm_ss(self.remaining_secs)
    }
}
