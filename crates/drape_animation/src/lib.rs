//! Drape Animation Primitives
//!
//! Spring physics, fixed-duration tweens, and easing functions.
//!
//! # Features
//!
//! - **Spring Physics**: semi-implicit springs with stiffness, damping, mass
//! - **Tweens**: timed single-value transitions with easing functions
//! - **Interruptible**: springs inherit velocity when retargeted mid-flight

pub mod easing;
pub mod spring;
pub mod tween;

pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
