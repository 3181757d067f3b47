//! Spring physics for animated values
//!
//! A spring animates a single value toward a target using stiffness,
//! damping, and mass. Springs are interruptible: retargeting mid-flight
//! keeps the current velocity, so motion stays continuous.

/// Distance from target below which a spring may come to rest
const REST_DELTA: f32 = 0.05;
/// Speed below which a spring may come to rest (units per second)
const REST_SPEED: f32 = 0.5;

/// Physical parameters for a spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Spring stiffness (force per unit of displacement)
    pub stiffness: f32,
    /// Damping coefficient (force per unit of velocity)
    pub damping: f32,
    /// Mass of the animated value
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::critical(100.0)
    }
}

impl SpringConfig {
    /// Create a config with explicit parameters
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Critically damped spring: fastest approach with no overshoot.
    ///
    /// Critical damping = 2 * sqrt(stiffness * mass), with mass = 1.
    pub fn critical(stiffness: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.sqrt(),
            mass: 1.0,
        }
    }

    /// Soft, slow spring (slight wobble)
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Quick spring with minimal wobble
    pub fn snappy() -> Self {
        Self::new(210.0, 20.0, 1.0)
    }

    /// Very fast spring, overdamped (no rebound)
    pub fn stiff() -> Self {
        Self::new(300.0, 36.0, 1.0)
    }
}

/// A spring-animated value
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Current animated value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity (units per second)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current target
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring. Velocity is kept so motion stays continuous.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Seed the velocity, e.g. from a gesture release
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Move the spring to `value` without animating, keeping the target
    pub fn reset(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
    }

    /// A spring is settled when it has reached its target and stopped
    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance the physics by `dt` seconds. Returns true while still moving.
    ///
    /// Semi-implicit integration: velocity is updated from the spring and
    /// damping forces first, then position from the new velocity. Stable for
    /// the stiffness range used here at 60-120fps frame deltas.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return false;
        }

        let displacement = self.target - self.value;
        let force = displacement * self.config.stiffness - self.velocity * self.config.damping;
        self.velocity += force / self.config.mass * dt;
        self.value += self.velocity * dt;

        if self.is_settled() {
            // Snap to target so consumers read an exact resting value
            self.value = self.target;
            self.velocity = 0.0;
            tracing::trace!("spring settled at {:.1}", self.target);
            return false;
        }

        true
    }
}
