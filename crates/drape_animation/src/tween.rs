//! Fixed-duration tween animations
//!
//! A tween moves a single value between two endpoints over a fixed duration,
//! shaped by an easing curve. Used for effects that should take the same
//! time regardless of distance, like a backdrop fade.

use crate::easing::Easing;

/// A timed single-value animation
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl Tween {
    /// Create a tween at rest at `from`
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f32,
            easing,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Start (or restart) the tween from the beginning
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Stop the tween at its current position
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Restart toward a new endpoint, departing from the current value.
    ///
    /// An open that interrupts a half-finished close fades from wherever
    /// the value currently is, not from the original endpoint.
    pub fn retarget(&mut self, to: f32) {
        self.from = self.value();
        self.to = to;
        self.start();
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress through the duration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.playing = false;
        }
    }
}
