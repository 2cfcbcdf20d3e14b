//! Progress ring animation
//!
//! Timed interpolation utilities and the driver that animates the home
//! tab's progress indicator. Two interpolations run side by side:
//!
//! - the fill, which eases from its current value to the latest progress
//!   ratio
//! - the pulse, a short scale-up-and-back played on every quick-add
//!
//! Both are visual only. A new target always supersedes the one in flight:
//! the interpolation restarts from whatever value is on screen, so the ring
//! never replays stale targets.
//!
//! Time is expressed as a [`Duration`] since an arbitrary origin, which keeps
//! the math independent of any clock.

use app_core::config::AnimationConfig;
use app_state::dashboard::ProgressSignal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::tokens::{duration, scale};

// =============================================================================
// Easing
// =============================================================================

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Quadratic acceleration
    EaseIn,
    /// Quadratic deceleration
    EaseOut,
    /// Quadratic acceleration then deceleration
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

// =============================================================================
// Interpolation
// =============================================================================

/// A value moving from `from` to `to` over `duration`, starting at `started_at`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
    easing: Easing,
}

impl Interpolation {
    /// Start a new interpolation
    pub fn new(from: f64, to: f64, started_at: Duration, duration: Duration, easing: Easing) -> Self {
        Self { from, to, started_at, duration, easing }
    }

    /// A value at rest
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO, Duration::ZERO, Easing::Linear)
    }

    /// Final value
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Value at time `now`
    pub fn value_at(&self, now: Duration) -> f64 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.started_at);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Whether the value has reached its target at `now`
    pub fn is_finished(&self, now: Duration) -> bool {
        self.duration.is_zero() || now >= self.started_at + self.duration
    }

    /// Head for a new target from the value shown at `now`
    pub fn retarget(&mut self, to: f64, now: Duration, duration: Duration) {
        self.from = self.value_at(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration;
    }
}

// =============================================================================
// Pulse
// =============================================================================

/// Scale pulse: rise to a peak, then fall back to rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    rise: Interpolation,
    half: Duration,
    peak: f64,
}

impl Pulse {
    /// A pulse at rest
    pub fn new(half: Duration, peak: f64) -> Self {
        Self { rise: Interpolation::settled(scale::REST), half, peak }
    }

    /// Start (or restart) the pulse from the current scale
    pub fn trigger(&mut self, now: Duration) {
        let current = self.value_at(now);
        self.rise = Interpolation::new(current, self.peak, now, self.half, Easing::EaseInOut);
    }

    /// Scale at time `now`
    pub fn value_at(&self, now: Duration) -> f64 {
        if !self.rise.is_finished(now) {
            return self.rise.value_at(now);
        }
        if self.rise.target() == scale::REST {
            return scale::REST;
        }
        let fall_start = self.rise.started_at + self.rise.duration;
        Interpolation::new(self.peak, scale::REST, fall_start, self.half, Easing::EaseInOut)
            .value_at(now)
    }

    /// Whether the pulse is back at rest
    pub fn is_finished(&self, now: Duration) -> bool {
        self.rise.target() == scale::REST
            || now >= self.rise.started_at + self.rise.duration + self.half
    }
}

// =============================================================================
// Progress Animator
// =============================================================================

/// Timings used by the progress animator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTimings {
    /// Fill duration for a plain retarget
    pub fill: Duration,
    /// Fill duration after a quick-add
    pub add_fill: Duration,
    /// Each half of the pulse
    pub pulse: Duration,
    /// Pulse peak scale
    pub pulse_scale: f64,
    /// Frame interval
    pub frame: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            fill: Duration::from_millis(duration::PROGRESS_FILL),
            add_fill: Duration::from_millis(duration::PROGRESS_ADD),
            pulse: Duration::from_millis(duration::PULSE),
            pulse_scale: scale::PULSE_PEAK,
            frame: Duration::from_millis(duration::FRAME),
        }
    }
}

impl From<&AnimationConfig> for AnimationTimings {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            fill: Duration::from_millis(config.fill_ms),
            add_fill: Duration::from_millis(config.add_fill_ms),
            pulse: Duration::from_millis(config.pulse_ms),
            pulse_scale: config.pulse_scale,
            frame: Duration::from_millis(config.frame_ms.max(1)),
        }
    }
}

/// Whether anything is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPhase {
    /// Everything at rest
    #[default]
    Idle,
    /// At least one interpolation in flight
    Animating,
}

/// What the progress ring should draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationFrame {
    /// Fill fraction of the progress bar
    pub fill: f64,
    /// Scale of the ring
    pub scale: f64,
    /// Idle or animating
    pub phase: AnimationPhase,
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self { fill: 0.0, scale: scale::REST, phase: AnimationPhase::Idle }
    }
}

/// Fill and pulse state for the progress ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimator {
    fill: Interpolation,
    pulse: Pulse,
    timings: AnimationTimings,
}

impl ProgressAnimator {
    /// An empty ring at rest
    pub fn new(timings: AnimationTimings) -> Self {
        Self {
            fill: Interpolation::settled(0.0),
            pulse: Pulse::new(timings.pulse, timings.pulse_scale),
            timings,
        }
    }

    /// Animate the fill to a new ratio
    pub fn retarget(&mut self, ratio: f64, now: Duration) {
        self.fill.retarget(ratio.clamp(0.0, 1.0), now, self.timings.fill);
    }

    /// Quick-add feedback: pulse and a faster fill
    pub fn water_added(&mut self, ratio: f64, now: Duration) {
        self.pulse.trigger(now);
        self.fill.retarget(ratio.clamp(0.0, 1.0), now, self.timings.add_fill);
    }

    /// React to a store signal
    pub fn apply(&mut self, signal: ProgressSignal, now: Duration) {
        match signal {
            ProgressSignal::Seed { ratio } => self.retarget(ratio, now),
            ProgressSignal::WaterAdded { ratio } => self.water_added(ratio, now),
        }
    }

    /// Idle once both interpolations have settled
    pub fn phase(&self, now: Duration) -> AnimationPhase {
        if self.fill.is_finished(now) && self.pulse.is_finished(now) {
            AnimationPhase::Idle
        } else {
            AnimationPhase::Animating
        }
    }

    /// Frame to draw at `now`
    pub fn frame(&self, now: Duration) -> AnimationFrame {
        AnimationFrame {
            fill: self.fill.value_at(now),
            scale: self.pulse.value_at(now),
            phase: self.phase(now),
        }
    }

    /// Frame interval
    pub fn frame_interval(&self) -> Duration {
        self.timings.frame
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Background task turning store signals into frames
///
/// Dropping the driver stops the task; whatever was in flight is discarded.
pub struct ProgressDriver {
    handle: JoinHandle<()>,
    frames: watch::Receiver<AnimationFrame>,
}

impl ProgressDriver {
    /// Spawn the driver on the current tokio runtime
    pub fn spawn(signals: mpsc::UnboundedReceiver<ProgressSignal>, timings: AnimationTimings) -> Self {
        let (frames_tx, frames) = watch::channel(AnimationFrame::default());
        let handle = tokio::spawn(run(signals, ProgressAnimator::new(timings), frames_tx));
        Self { handle, frames }
    }

    /// Latest frame
    pub fn frame(&self) -> AnimationFrame {
        *self.frames.borrow()
    }

    /// Subscribe to frames
    pub fn subscribe(&self) -> watch::Receiver<AnimationFrame> {
        self.frames.clone()
    }

    /// Whether the task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ProgressDriver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run(
    mut signals: mpsc::UnboundedReceiver<ProgressSignal>,
    mut animator: ProgressAnimator,
    frames: watch::Sender<AnimationFrame>,
) {
    let origin = Instant::now();
    let mut ticker = interval(animator.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::debug!("progress driver started");

    loop {
        let animating = animator.phase(origin.elapsed()) == AnimationPhase::Animating;

        tokio::select! {
            signal = signals.recv() => match signal {
                Some(signal) => {
                    let now = origin.elapsed();
                    animator.apply(signal, now);
                    frames.send_replace(animator.frame(now));
                }
                None => break,
            },
            _ = ticker.tick(), if animating => {
                frames.send_replace(animator.frame(origin.elapsed()));
            }
        }
    }

    tracing::debug!("progress driver stopped");
}
