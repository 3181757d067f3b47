//! Drape Snap-Sheet Controller
//!
//! A draggable bottom sheet rests at one of a small set of named vertical
//! positions (tiers). This crate owns the interaction logic between the
//! gesture input and the rendered offset:
//!
//! - **Snap points**: ordered tier-to-offset mapping with validation
//! - **Controller**: open/close lifecycle, drag tracking, and settle
//!   decisions from release position + velocity
//! - **Position cell**: a single-writer shared offset the render path reads
//!   every frame
//! - **Host**: owns and ticks every visible sheet
//!
//! # Example
//!
//! ```rust
//! use drape_sheet::{SheetConfig, SheetController, SnapPoints, Tier};
//!
//! let snap = SnapPoints::new(100.0, 300.0, 500.0, 700.0, 900.0).unwrap();
//! let mut sheet = SheetController::new(snap, Tier::Large, SheetConfig::default());
//!
//! sheet.open();
//! for _ in 0..600 {
//!     sheet.tick(1.0 / 60.0);
//! }
//! assert_eq!(sheet.offset(), 100.0);
//! assert_eq!(sheet.tier(), Tier::Large);
//! ```

pub mod controller;
pub mod host;
pub mod position;
pub mod snap;

pub use controller::{SheetConfig, SheetController};
pub use host::{SheetHost, SheetKey};
pub use position::SheetPosition;
pub use snap::{SnapPointError, SnapPoints, Tier};
