#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

/// One-way reveal latch. Only the first visibility crossing moves it to
/// `Revealed`; nothing moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    phase: RevealPhase,
}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed a visibility sample; returns `true` only for the sample that
    /// triggered the reveal.
    pub fn observe(&mut self, visible: bool) -> bool {
        match (self.phase, visible) {
            (RevealPhase::Pending, true) => {
                self.phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl MotionState {
    pub const RESTING: MotionState = MotionState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// How a block looks before it is revealed and how long it takes to settle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    pub initial: MotionState,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
}

impl RevealMotion {
    const DEFAULT_DURATION: f64 = 0.6;

    fn from_initial(initial: MotionState) -> Self {
        Self {
            initial,
            duration: Self::DEFAULT_DURATION,
            delay: 0.0,
        }
    }

    pub fn fade() -> Self {
        Self::from_initial(MotionState {
            opacity: 0.0,
            ..MotionState::RESTING
        })
    }

    /// Rises into place from `distance` pixels below.
    pub fn fade_up(distance: f64) -> Self {
        Self::from_initial(MotionState {
            opacity: 0.0,
            y: distance,
            ..MotionState::RESTING
        })
    }

    /// Slides in horizontally; negative `distance` comes from the left.
    pub fn slide_in(distance: f64) -> Self {
        Self::from_initial(MotionState {
            opacity: 0.0,
            x: distance,
            ..MotionState::RESTING
        })
    }

    pub fn scale_in(from: f64) -> Self {
        Self::from_initial(MotionState {
            opacity: 0.0,
            scale: from,
            ..MotionState::RESTING
        })
    }

    pub fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn style(&self, phase: RevealPhase) -> String {
        let state = match phase {
            RevealPhase::Pending => self.initial,
            RevealPhase::Revealed => MotionState::RESTING,
        };
        format!(
            "{} transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s; will-change: opacity, transform;",
            state.css(),
            d = self.duration,
            delay = self.delay,
        )
    }
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self::fade_up(20.0)
    }
}
