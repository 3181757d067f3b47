//! The snap-sheet controller
//!
//! Translates discrete user intent (open, drag, release, close) into a
//! continuous animated vertical offset plus a discrete current-tier label.
//! One controller instance exists per visible sheet and is the only writer
//! of that sheet's [`SheetPosition`].
//!
//! Drag updates are absolute, not incremental: the offset at gesture begin
//! is captured as a baseline and every update recomputes
//! `baseline + translation`, so repeated small deltas cannot drift.

use std::sync::Arc;

use drape_animation::{Easing, Spring, Tween};
pub use drape_animation::SpringConfig;

use crate::position::SheetPosition;
use crate::snap::{SnapPoints, Tier};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sheet motion and gesture thresholds
#[derive(Debug, Clone, Copy)]
pub struct SheetConfig {
    /// Spring used for every settle (open, snap, close)
    pub spring: SpringConfig,
    /// Rubber-band distance permitted past the `Mini` offset during a drag
    pub over_drag_allowance: f32,
    /// Distance past the `Mini` offset at which a release may dismiss
    pub dismiss_threshold: f32,
    /// Minimum downward release velocity for a dismiss (units per second)
    pub dismiss_velocity: f32,
    /// Release speed above which the snap target is chosen by direction
    /// instead of proximity (units per second)
    pub fling_velocity: f32,
    /// Backdrop fade duration in milliseconds
    pub backdrop_fade_ms: u32,
    /// Delay from `close()` to the `on_closed` callback, in milliseconds
    pub close_duration_ms: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            // Critically damped: fast approach, no overshoot past a tier
            spring: SpringConfig::critical(100.0),
            over_drag_allowance: 100.0,
            dismiss_threshold: 30.0,
            dismiss_velocity: 200.0,
            fling_velocity: 500.0,
            backdrop_fade_ms: 200,
            close_duration_ms: 200,
        }
    }
}

impl SheetConfig {
    /// Config with a softer settle spring (slight wobble)
    pub fn gentle() -> Self {
        Self {
            spring: SpringConfig::gentle(),
            ..Default::default()
        }
    }

    /// Config with no rubber-band past the smallest visible tier
    pub fn no_over_drag() -> Self {
        Self {
            over_drag_allowance: 0.0,
            ..Default::default()
        }
    }
}

// ============================================================================
// Drag Session
// ============================================================================

/// Ephemeral state for one gesture lifecycle (begin -> update* -> end)
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Offset captured at gesture begin; updates are `baseline + translation`
    baseline: f32,
}

// ============================================================================
// Controller
// ============================================================================

/// Callback invoked once the close animation's nominal duration elapses
pub type ClosedCallback = Arc<dyn Fn() + Send + Sync>;

/// Owns one sheet's animated offset and current-tier label
pub struct SheetController {
    snap: SnapPoints,
    config: SheetConfig,
    /// Tier animated to by `open()`
    initial_tier: Tier,
    /// Current tier label (updated eagerly when a settle is scheduled)
    tier: Tier,
    /// The live offset; render paths hold clones and read it every frame
    position: SheetPosition,
    spring: Spring,
    backdrop: Tween,
    drag: Option<DragSession>,
    closing: bool,
    close_elapsed_ms: f32,
    closed_notified: bool,
    on_closed: Option<ClosedCallback>,
}

impl SheetController {
    /// Create a controller parked off-screen at `Dismissed`
    pub fn new(snap: SnapPoints, initial_tier: Tier, config: SheetConfig) -> Self {
        let parked = snap.dismissed();
        Self {
            snap,
            config,
            initial_tier,
            tier: Tier::Dismissed,
            position: SheetPosition::new(parked),
            spring: Spring::new(config.spring, parked),
            backdrop: Tween::new(0.0, 1.0, config.backdrop_fade_ms, Easing::EaseOut),
            drag: None,
            closing: false,
            close_elapsed_ms: 0.0,
            closed_notified: false,
            on_closed: None,
        }
    }

    /// Set the callback fired once per close, after `close_duration_ms`
    pub fn on_closed<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_closed = Some(Arc::new(callback));
        self
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    /// The live vertical offset
    pub fn offset(&self) -> f32 {
        self.position.get()
    }

    /// Current tier label
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Backdrop opacity (0.0 to 1.0)
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop.value()
    }

    /// A read handle to the live offset for the render path
    pub fn position(&self) -> SheetPosition {
        self.position.clone()
    }

    /// The snap point set this controller was built with
    pub fn snap_points(&self) -> SnapPoints {
        self.snap
    }

    /// True while a settle animation is in flight (and no drag is live)
    pub fn is_settling(&self) -> bool {
        self.drag.is_none() && !self.spring.is_settled()
    }

    /// True from `close()` until the close completes
    pub fn is_closing(&self) -> bool {
        self.closing && !self.closed_notified
    }

    /// True once a close has run its nominal duration
    pub fn is_closed(&self) -> bool {
        self.closing && self.closed_notified
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Animate to the configured initial tier and fade the backdrop in.
    ///
    /// Also reopens a closed sheet: close state is reset so a later
    /// `close()` fires `on_closed` again.
    pub fn open(&mut self) {
        self.closing = false;
        self.close_elapsed_ms = 0.0;
        self.closed_notified = false;
        self.drag = None;

        self.sync_spring_to_offset();
        self.spring.set_target(self.snap.offset(self.initial_tier));
        self.tier = self.initial_tier;
        self.backdrop.retarget(1.0);

        tracing::debug!(tier = ?self.initial_tier, "sheet open");
    }

    /// Animate off-screen, fade the backdrop out, and schedule `on_closed`.
    ///
    /// Idempotent: calling again while a close is in flight does nothing.
    pub fn close(&mut self) {
        if self.closing {
            return;
        }
        self.closing = true;
        self.close_elapsed_ms = 0.0;
        self.closed_notified = false;
        self.drag = None;

        self.sync_spring_to_offset();
        self.spring.set_target(self.snap.dismissed());
        self.tier = Tier::Dismissed;
        self.backdrop.retarget(0.0);

        tracing::debug!("sheet close");
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Begin a drag, capturing the live offset as the baseline.
    ///
    /// No-op while a close is in flight. Beginning a new drag mid-settle is
    /// permitted and re-baselines from wherever the offset currently is.
    pub fn drag_begin(&mut self) {
        if self.closing {
            return;
        }
        self.drag = Some(DragSession {
            baseline: self.position.get(),
        });
    }

    /// Track a drag: write `baseline + translation`, clamped to the range
    /// `[large, mini + over_drag_allowance]`, to the live offset.
    ///
    /// Runs on every gesture movement event; pure and allocation-free.
    pub fn drag_update(&mut self, translation_y: f32) {
        let Some(drag) = self.drag else { return };

        let candidate = drag.baseline + translation_y;
        let clamped = candidate.clamp(
            self.snap.large(),
            self.snap.mini() + self.config.over_drag_allowance,
        );
        self.position.set(clamped);
    }

    /// End a drag and settle. Decision order:
    ///
    /// 1. released past `mini + dismiss_threshold` while moving down faster
    ///    than `dismiss_velocity` -> dismiss
    /// 2. fling faster than `fling_velocity` -> `Large` (up) / `Mini` (down)
    /// 3. otherwise the nearest visible tier, ties toward `Large`
    ///
    /// The tier label updates as soon as the settle is scheduled, not when
    /// the animation lands.
    pub fn drag_end(&mut self, translation_y: f32, velocity_y: f32) {
        let Some(drag) = self.drag.take() else { return };

        // Unclamped: the decision logic handles out-of-range values
        let candidate = drag.baseline + translation_y;

        if candidate > self.snap.mini() + self.config.dismiss_threshold
            && velocity_y > self.config.dismiss_velocity
        {
            tracing::trace!(candidate, velocity_y, "drag end: flung away, dismissing");
            self.close();
            return;
        }

        let target = if velocity_y < -self.config.fling_velocity {
            Tier::Large
        } else if velocity_y > self.config.fling_velocity {
            Tier::Mini
        } else {
            self.snap.nearest_visible(candidate)
        };

        let target_offset = self
            .snap
            .offset(target)
            .clamp(self.snap.large(), self.snap.mini());

        self.sync_spring_to_offset();
        self.spring.set_velocity(velocity_y);
        self.spring.set_target(target_offset);
        self.tier = target;

        tracing::trace!(candidate, velocity_y, tier = ?target, "drag end: settling");
    }

    // =========================================================================
    // Frame tick
    // =========================================================================

    /// Advance animations by `dt` seconds.
    ///
    /// Fire-and-forget: callers do not await completion. While a drag is
    /// live the spring is held so it cannot fight the finger.
    pub fn tick(&mut self, dt: f32) {
        let dt_ms = dt * 1000.0;

        self.backdrop.tick(dt_ms);

        if self.drag.is_none() {
            self.spring.step(dt);
            self.position.set(self.spring.value());
        }

        if self.closing && !self.closed_notified {
            self.close_elapsed_ms += dt_ms;
            if self.close_elapsed_ms >= self.config.close_duration_ms as f32 {
                self.closed_notified = true;
                tracing::debug!("sheet closed");
                if let Some(callback) = &self.on_closed {
                    callback();
                }
            }
        }
    }

    /// Align the spring with the live offset before retargeting.
    ///
    /// After a drag the offset was written directly and the spring is
    /// stale; mid-settle the two already agree and the spring keeps its
    /// velocity.
    fn sync_spring_to_offset(&mut self) {
        let offset = self.position.get();
        if (self.spring.value() - offset).abs() > f32::EPSILON {
            self.spring.reset(offset);
        }
    }
}
