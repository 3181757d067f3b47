//! The shared sheet offset cell
//!
//! One controller owns the write side for the lifetime of its sheet; the
//! render path holds clones and reads the offset every frame. Gesture
//! events arrive on the platform recognizer's thread, so the cell is an
//! atomic rather than a mutex: reads and writes are lock-free and
//! allocation-free, which keeps per-frame drag updates cheap.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A reference-counted vertical offset, written only by its controller
#[derive(Debug, Clone)]
pub struct SheetPosition {
    bits: Arc<AtomicU32>,
}

impl SheetPosition {
    /// Create a cell holding `offset`
    pub fn new(offset: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(offset.to_bits())),
        }
    }

    /// Read the current offset
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Write the offset. Crate-private: only the owning controller writes.
    pub(crate) fn set(&self, offset: f32) {
        self.bits.store(offset.to_bits(), Ordering::Relaxed);
    }
}
