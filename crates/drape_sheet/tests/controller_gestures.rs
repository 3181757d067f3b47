//! Integration tests for the full gesture -> settle pipeline
//!
//! These tests drive a controller the way a platform gesture recognizer and
//! frame loop would: begin/update/end events with absolute translations,
//! then simulated frames until the motion settles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use drape_sheet::{SheetConfig, SheetController, SheetHost, SnapPoints, Tier};

fn snap() -> SnapPoints {
    SnapPoints::new(100.0, 300.0, 500.0, 700.0, 900.0).unwrap()
}

fn open_sheet() -> SheetController {
    let mut controller = SheetController::new(snap(), Tier::Large, SheetConfig::default());
    controller.open();
    run_frames(&mut controller, 600);
    controller
}

fn run_frames(controller: &mut SheetController, frames: u32) {
    for _ in 0..frames {
        controller.tick(1.0 / 60.0);
    }
}

/// P1: every drag update lands inside [large, mini + over_drag_allowance]
#[test]
fn test_drag_updates_are_clamped_to_track() {
    let mut controller = open_sheet();
    let config = SheetConfig::default();

    controller.drag_begin();
    for translation in [-10_000.0, -350.0, -1.0, 0.0, 42.5, 633.0, 699.9, 10_000.0] {
        controller.drag_update(translation);
        let offset = controller.offset();
        assert!(
            (100.0..=700.0 + config.over_drag_allowance).contains(&offset),
            "translation {translation} escaped the track: offset {offset}"
        );
    }
}

/// P2: close is idempotent and on_closed fires exactly once
#[test]
fn test_double_close_fires_on_closed_once() {
    let fired = Arc::new(AtomicUsize::new(0));
    let observer = fired.clone();

    let mut controller = SheetController::new(snap(), Tier::Large, SheetConfig::default())
        .on_closed(move || {
            observer.fetch_add(1, Ordering::SeqCst);
        });
    controller.open();
    run_frames(&mut controller, 600);

    controller.close();
    controller.close();
    run_frames(&mut controller, 600);

    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(controller.offset(), 900.0);
    assert_eq!(controller.tier(), Tier::Dismissed);
    assert!(controller.is_closed());
}

/// P3: a slow release settles to the nearest tier (420 is nearer Small=500
/// than Medium=300)
#[test]
fn test_slow_release_snaps_to_nearest_tier() {
    let mut controller = open_sheet();

    controller.drag_begin();
    controller.drag_update(320.0); // baseline 100 -> candidate 420
    controller.drag_end(320.0, 100.0);

    assert_eq!(controller.tier(), Tier::Small); // label updates eagerly
    run_frames(&mut controller, 600);
    assert_eq!(controller.offset(), 500.0);
}

/// P4: a fast upward fling targets Large regardless of position
#[test]
fn test_upward_fling_targets_large() {
    let mut controller = open_sheet();

    controller.drag_begin();
    controller.drag_update(550.0); // near Mini
    controller.drag_end(550.0, -600.0);

    assert_eq!(controller.tier(), Tier::Large);
    run_frames(&mut controller, 600);
    assert_eq!(controller.offset(), 100.0);
}

/// A fast downward fling that is not past the dismiss region targets Mini
#[test]
fn test_downward_fling_targets_mini() {
    let mut controller = open_sheet();

    controller.drag_begin();
    controller.drag_update(100.0);
    controller.drag_end(100.0, 800.0);

    assert_eq!(controller.tier(), Tier::Mini);
    run_frames(&mut controller, 600);
    assert_eq!(controller.offset(), 700.0);
}

/// P5: released past mini + dismiss_threshold while moving down faster than
/// dismiss_velocity dismisses instead of snapping back to Mini
#[test]
fn test_release_past_mini_with_downward_velocity_dismisses() {
    let fired = Arc::new(AtomicUsize::new(0));
    let observer = fired.clone();

    let mut controller = SheetController::new(snap(), Tier::Large, SheetConfig::default())
        .on_closed(move || {
            observer.fetch_add(1, Ordering::SeqCst);
        });
    controller.open();
    run_frames(&mut controller, 600);

    controller.drag_begin();
    controller.drag_update(650.0); // baseline 100 -> candidate 750 = mini + 50
    controller.drag_end(650.0, 250.0);

    assert!(controller.is_closing());
    assert_eq!(controller.tier(), Tier::Dismissed);

    run_frames(&mut controller, 600);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(controller.offset(), 900.0);
}

/// The same position released slowly snaps back to Mini instead
#[test]
fn test_release_past_mini_without_velocity_snaps_back() {
    let mut controller = open_sheet();

    controller.drag_begin();
    controller.drag_update(650.0);
    controller.drag_end(650.0, 50.0); // below dismiss_velocity

    assert_eq!(controller.tier(), Tier::Mini);
    run_frames(&mut controller, 600);
    assert_eq!(controller.offset(), 700.0);
}

/// P6: a fully closed sheet reopens to the configured initial tier
#[test]
fn test_reopen_after_close_restores_initial_tier() {
    let fired = Arc::new(AtomicUsize::new(0));
    let observer = fired.clone();

    let mut controller = SheetController::new(snap(), Tier::Large, SheetConfig::default())
        .on_closed(move || {
            observer.fetch_add(1, Ordering::SeqCst);
        });
    controller.open();
    run_frames(&mut controller, 600);
    controller.close();
    run_frames(&mut controller, 600);
    assert!(controller.is_closed());

    controller.open();
    assert_eq!(controller.tier(), Tier::Large);
    run_frames(&mut controller, 600);
    assert_eq!(controller.offset(), 100.0);
    assert!((controller.backdrop_opacity() - 1.0).abs() < 0.01);

    // A second close fires the callback again
    controller.close();
    run_frames(&mut controller, 600);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

/// Spec scenario: open, drag 250 down from Large, release with no velocity,
/// settle at Medium (|300 - 350| = 50 beats |500 - 350| = 150)
#[test]
fn test_open_drag_release_scenario() {
    let mut controller = open_sheet();
    assert_eq!(controller.offset(), 100.0);

    controller.drag_begin();
    controller.drag_update(250.0);
    assert_eq!(controller.offset(), 350.0);

    controller.drag_end(250.0, 0.0);
    assert_eq!(controller.tier(), Tier::Medium);

    run_frames(&mut controller, 600);
    assert_eq!(controller.offset(), 300.0);
}

/// The render path reads the live offset through a cloned position handle
#[test]
fn test_position_handle_tracks_drag_and_settle() {
    let mut controller = open_sheet();
    let render_side = controller.position();

    controller.drag_begin();
    controller.drag_update(250.0);
    assert_eq!(render_side.get(), 350.0);

    controller.drag_end(250.0, 0.0);
    run_frames(&mut controller, 600);
    assert_eq!(render_side.get(), 300.0);
}

/// Host-level flow: show, gesture-dismiss, sweep
#[test]
fn test_host_show_dismiss_sweep() {
    let mut host = SheetHost::new();
    let key = host.show(SheetController::new(
        snap(),
        Tier::Large,
        SheetConfig::default(),
    ));

    for _ in 0..600 {
        host.tick(1.0 / 60.0);
    }
    assert_eq!(host.get(key).unwrap().offset(), 100.0);

    // Fling the sheet away
    let sheet = host.get_mut(key).unwrap();
    sheet.drag_begin();
    sheet.drag_update(680.0);
    sheet.drag_end(680.0, 900.0);
    assert!(host.get(key).unwrap().is_closing());

    for _ in 0..600 {
        host.tick(1.0 / 60.0);
    }
    assert!(host.get(key).is_none());
    assert!(!host.has_active_animations());
}
