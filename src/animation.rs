//! Animated constraint transitions
//!
//! Constraint mutations settle visually through a cooperative, single-threaded
//! driver: the host calls [`ViewHierarchy::advance`](crate::ViewHierarchy::advance)
//! with elapsed time, presented frames interpolate toward the solver's
//! targets, and completions fire when a transition reaches its end. There is
//! no cancellation primitive; a newer update targeting the same view takes
//! over its frames (latest wins) while the superseded transition still runs
//! out its clock and reports completion.

use crate::layout::hierarchy::ViewId;
use crate::layout::types::Rect;

use serde::Deserialize;

/// Callback invoked once a transition finishes
pub type Completion = Box<dyn FnOnce()>;

/// Timing curve applied to non-spring transitions.
///
/// An underdamped spring (damping ratio below 1) follows its own response
/// and ignores the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationCurve {
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
    Linear,
}

impl AnimationCurve {
    /// Ease a normalized time value in `[0, 1]`
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            AnimationCurve::Linear => t,
            AnimationCurve::EaseIn => t * t,
            AnimationCurve::EaseOut => t * (2.0 - t),
            AnimationCurve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Settings for animated constraint changes.
///
/// The defaults apply whenever a mutation is requested without explicit
/// settings. Set the duration to zero to disable animation; the change is
/// then applied in the same layout pass and the completion fires immediately
/// after it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Transition length in seconds. Zero disables animation. Default 0.4.
    pub duration: f64,

    /// Seconds to wait before the transition starts. Default 0.0.
    pub delay: f64,

    /// Spring damping ratio. Values below 1.0 overshoot and oscillate;
    /// 1.0 and above settle on the timing curve. Default 0.75.
    pub damping: f64,

    /// Initial velocity, normalized to full transition distance per
    /// duration. Default 1.0.
    pub velocity: f64,

    /// Timing curve for non-spring transitions. Default ease-in-out.
    pub curve: AnimationCurve,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: 0.4,
            delay: 0.0,
            damping: 0.75,
            velocity: 1.0,
            curve: AnimationCurve::EaseInOut,
        }
    }
}

/// Exponential decay at the end of the normalized spring response;
/// e^-8 leaves ~0.03% residual.
const SPRING_DECAY: f64 = 8.0;

impl AnimationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with a custom duration
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Settings that disable animation entirely
    pub fn none() -> Self {
        Self::with_duration(0.0)
    }

    /// Whether these settings produce a visible transition
    pub fn animates(&self) -> bool {
        self.duration > 0.0
    }

    /// Delay plus duration, in seconds
    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }

    /// Interpolation progress for normalized time `u` in `[0, 1]`.
    ///
    /// Underdamped springs may exceed 1.0 mid-flight (overshoot); the value
    /// is exactly 0.0 at the start and 1.0 at the end.
    pub fn progress(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        if self.damping >= 1.0 {
            return self.curve.apply(u);
        }

        // Normalized underdamped spring step response with the decay fixed
        // so the envelope has died out at u = 1.
        let zeta = self.damping.max(0.05);
        let omega = SPRING_DECAY / zeta;
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-SPRING_DECAY * u).exp();
        let coefficient = (SPRING_DECAY - self.velocity) / omega_d;
        1.0 - envelope * ((omega_d * u).cos() + coefficient * (omega_d * u).sin())
    }
}

struct TransitionFrame {
    view: ViewId,
    from: Rect,
    to: Rect,
}

/// One in-flight animated layout change
pub struct Transition {
    frames: Vec<TransitionFrame>,
    settings: AnimationSettings,
    elapsed: f64,
    completion: Option<Completion>,
}

impl Transition {
    pub fn new(settings: AnimationSettings, completion: Option<Completion>) -> Self {
        Self {
            frames: Vec::new(),
            settings,
            elapsed: 0.0,
            completion,
        }
    }

    /// Record a view's frame movement for this transition
    pub fn push_frame(&mut self, view: ViewId, from: Rect, to: Rect) {
        self.frames.push(TransitionFrame { view, from, to });
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.settings.total()
    }
}

/// Cooperative driver for in-flight transitions
pub struct Animator {
    transitions: Vec<Transition>,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Whether any transition is still in flight
    pub fn is_active(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Start a transition.
    ///
    /// Frames for views already animated by an earlier transition move to the
    /// new one (latest wins); the earlier transition keeps running for its
    /// remaining frames and still reports completion at its scheduled end.
    pub fn begin(&mut self, transition: Transition) {
        for pending in &mut self.transitions {
            pending
                .frames
                .retain(|frame| !transition.frames.iter().any(|new| new.view == frame.view));
        }
        self.transitions.push(transition);
    }

    /// Step every transition by `dt` seconds.
    ///
    /// Returns the presented-frame updates to apply and the completions that
    /// became due, in transition start order.
    pub fn advance(&mut self, dt: f64) -> (Vec<(ViewId, Rect)>, Vec<Completion>) {
        let mut updates = Vec::new();
        let mut completions = Vec::new();

        for transition in &mut self.transitions {
            transition.elapsed += dt;

            if transition.finished() {
                for frame in &transition.frames {
                    updates.push((frame.view, frame.to));
                }
                if let Some(completion) = transition.completion.take() {
                    completions.push(completion);
                }
            } else if transition.elapsed > transition.settings.delay {
                let u = (transition.elapsed - transition.settings.delay)
                    / transition.settings.duration;
                let t = transition.settings.progress(u);
                for frame in &transition.frames {
                    updates.push((frame.view, frame.from.lerp(&frame.to, t)));
                }
            }
        }

        self.transitions.retain(|transition| !transition.finished());
        (updates, completions)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}
