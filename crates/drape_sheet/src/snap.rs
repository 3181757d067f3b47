//! Snap points: the named vertical positions a sheet can rest at
//!
//! Offsets measure the distance from the top of the viewport to the top of
//! the sheet, so `Large` (the tallest presentation) has the smallest offset
//! and `Dismissed` sits at the viewport height, fully off-screen.

use thiserror::Error;

/// A named resting position for a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    /// Tallest presentation (smallest offset)
    #[default]
    Large,
    Medium,
    Small,
    /// Smallest visible presentation
    Mini,
    /// Fully off-screen (offset equals the viewport height)
    Dismissed,
}

impl Tier {
    /// Visible tiers in offset order, `Large` first
    pub const VISIBLE: [Tier; 4] = [Tier::Large, Tier::Medium, Tier::Small, Tier::Mini];

    /// Returns true for any tier other than `Dismissed`
    pub fn is_visible(&self) -> bool {
        !matches!(self, Tier::Dismissed)
    }
}

/// Error validating a snap point set
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SnapPointError {
    /// Offsets must not decrease from `Large` toward `Dismissed`
    #[error("snap offsets must be non-decreasing: {prev:?} ({prev_offset}) > {next:?} ({next_offset})")]
    NotMonotonic {
        prev: Tier,
        prev_offset: f32,
        next: Tier,
        next_offset: f32,
    },
}

/// Ordered tier-to-offset mapping for one sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoints {
    large: f32,
    medium: f32,
    small: f32,
    mini: f32,
    dismissed: f32,
}

impl SnapPoints {
    /// Create a snap point set.
    ///
    /// `dismissed` is the viewport height; a sheet parked there is fully
    /// off-screen. Offsets must be non-decreasing from `large` to
    /// `dismissed`.
    pub fn new(
        large: f32,
        medium: f32,
        small: f32,
        mini: f32,
        dismissed: f32,
    ) -> Result<Self, SnapPointError> {
        let points = Self {
            large,
            medium,
            small,
            mini,
            dismissed,
        };

        let mut prev = Tier::Large;
        for next in [Tier::Medium, Tier::Small, Tier::Mini, Tier::Dismissed] {
            if points.offset(prev) > points.offset(next) {
                return Err(SnapPointError::NotMonotonic {
                    prev,
                    prev_offset: points.offset(prev),
                    next,
                    next_offset: points.offset(next),
                });
            }
            prev = next;
        }

        Ok(points)
    }

    /// The offset for a tier
    pub fn offset(&self, tier: Tier) -> f32 {
        match tier {
            Tier::Large => self.large,
            Tier::Medium => self.medium,
            Tier::Small => self.small,
            Tier::Mini => self.mini,
            Tier::Dismissed => self.dismissed,
        }
    }

    /// Offset of the tallest presentation (lower drag bound)
    pub fn large(&self) -> f32 {
        self.large
    }

    /// Offset of the smallest visible presentation
    pub fn mini(&self) -> f32 {
        self.mini
    }

    /// Off-screen offset (viewport height)
    pub fn dismissed(&self) -> f32 {
        self.dismissed
    }

    /// The visible tier whose offset is closest to `candidate`.
    ///
    /// Ties go to the tier appearing first in [`Tier::VISIBLE`], i.e.
    /// toward `Large`.
    pub fn nearest_visible(&self, candidate: f32) -> Tier {
        let mut best = Tier::VISIBLE[0];
        let mut best_distance = (self.offset(best) - candidate).abs();

        for tier in &Tier::VISIBLE[1..] {
            let distance = (self.offset(*tier) - candidate).abs();
            if distance < best_distance {
                best = *tier;
                best_distance = distance;
            }
        }

        best
    }
}
