//! Screen transition state
//!
//! Every screen slides/fades on when added and off when exiting or covered.
//! `position` runs from 1.0 (fully off) to 0.0 (fully on); a horizontal drag
//! may push it briefly negative.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    TransitionOn,
    Active,
    TransitionOff,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Transition {
    state: ScreenState,
    position: f32,
    on_time: f32,
    off_time: f32,
    is_exiting: bool,
    exited: bool,
    other_screen_has_focus: bool,
}

impl Transition {
    /// New screens start fully off and transitioning on
    pub fn new(on_time: f32, off_time: f32) -> Self {
        Transition {
            state: ScreenState::TransitionOn,
            position: 1.0,
            on_time,
            off_time,
            is_exiting: false,
            exited: false,
            other_screen_has_focus: false,
        }
    }

    /// Advances the transition by `elapsed` seconds
    pub fn update(&mut self, elapsed: f32, other_screen_has_focus: bool, covered: bool) {
        self.other_screen_has_focus = other_screen_has_focus;

        if self.is_exiting {
            self.state = ScreenState::TransitionOff;
            if !self.step(elapsed, self.off_time, 1.0) {
                self.exited = true;
            }
        } else if covered {
            self.state = if self.step(elapsed, self.off_time, 1.0) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            };
        } else {
            self.state = if self.step(elapsed, self.on_time, -1.0) {
                ScreenState::TransitionOn
            } else {
                ScreenState::Active
            };
        }
    }

    /// Moves `position` toward 0 (direction -1) or 1 (direction +1)
    ///
    /// Returns false once the end has been reached.
    fn step(&mut self, elapsed: f32, duration: f32, direction: f32) -> bool {
        let delta = if duration <= 0.0 { 1.0 } else { elapsed / duration };

        self.position += delta * direction;

        if (direction < 0.0 && self.position <= 0.0) || (direction > 0.0 && self.position >= 1.0) {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }

        true
    }

    /// Starts transitioning off; the screen is removed once fully off
    pub fn exit(&mut self) {
        if self.off_time <= 0.0 {
            self.exited = true;
        }
        self.is_exiting = true;
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = position.clamp(-1.0, 1.0);
    }

    /// 1.0 when fully on, 0.0 when fully off
    pub fn alpha(&self) -> f32 {
        (1.0 - self.position).clamp(0.0, 1.0)
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }

    /// Whether the screen should respond to the player
    pub fn is_active(&self) -> bool {
        !self.other_screen_has_focus
            && matches!(self.state, ScreenState::TransitionOn | ScreenState::Active)
    }
}
