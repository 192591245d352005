use super::*;
use crate::animation::{FrameOutcome, LoopState};
use crate::config::{LifeConfig, RenderMode};
use crate::render::{RecordingSurface, RenderStrategy, Surface};
use crate::support::XorShift32;

fn controller() -> HeroController {
    HeroController::new(LifeConfig::default(), Box::new(XorShift32::new(7)), false)
}

fn started(width: u32, height: u32) -> (HeroController, RecordingSurface) {
    let mut ctl = controller();
    let mut surface = RecordingSurface::new(300, 150);
    assert!(ctl.start(width, height, 0.0, &mut surface));
    (ctl, surface)
}

#[test]
fn start_sizes_surface_and_grid() {
    let (ctl, surface) = started(640, 480);

    assert!(ctl.is_started());
    assert_eq!(ctl.loop_state(), LoopState::Running);
    assert_eq!(surface.size(), (640, 480));
    assert_eq!(ctl.engine().grid().cols(), 64);
    assert_eq!(ctl.engine().grid().rows(), 48);
    // Seeded and painted once.
    assert!(ctl.engine().grid().alive_count() > 0);
    assert_eq!(surface.clear_count(), 1);
}

#[test]
fn second_start_is_ignored() {
    let (mut ctl, mut surface) = started(400, 300);
    let before = ctl.engine().grid().cells().to_vec();
    surface.take();

    assert!(!ctl.start(800, 600, 50.0, &mut surface));
    assert_eq!(ctl.engine().grid().cols(), 40);
    assert_eq!(ctl.engine().grid().cells(), before.as_slice());
    assert!(surface.ops().is_empty());
}

#[test]
fn discovery_is_ignored_once_started() {
    let (mut ctl, _) = started(400, 300);
    assert_eq!(ctl.discover(true), Discovery::AlreadyStarted);
    assert_eq!(ctl.discover(false), Discovery::AlreadyStarted);
}

#[test]
fn discovery_retries_then_gives_up() {
    let mut ctl = controller();
    for _ in 0..40 {
        assert_eq!(ctl.discover(false), Discovery::RetryAfter(150));
    }
    assert_eq!(ctl.discover(false), Discovery::GiveUp);
    assert!(!ctl.is_started());
}

#[test]
fn pageshow_before_start_leaves_discovery_alone() {
    let mut ctl = controller();

    // Mid-retry: the pending chain keeps its place, no second chain starts.
    assert_eq!(ctl.discover(false), Discovery::RetryAfter(150));
    assert_eq!(ctl.resume(500.0), Resume::NotStarted);
    let mut lookups = 1;
    loop {
        lookups += 1;
        if ctl.discover(false) == Discovery::GiveUp {
            break;
        }
    }
    assert_eq!(lookups, 41);

    // Given up for good, even after a later pageshow.
    assert_eq!(ctl.resume(9_000.0), Resume::NotStarted);
    assert_eq!(ctl.discover(true), Discovery::GiveUp);
    assert!(!ctl.is_started());
}

#[test]
fn resize_reinitializes_and_repaints() {
    let (mut ctl, mut surface) = started(400, 300);
    ctl.frame(150.0, &mut surface);
    assert_eq!(ctl.engine().generation(), 1);
    surface.take();

    assert!(ctl.resize(303, 99, &mut surface));

    let grid = ctl.engine().grid();
    assert_eq!((grid.cols(), grid.rows()), (30, 9));
    assert_eq!(grid.back_buffer().len(), 270);
    assert_eq!(ctl.engine().generation(), 0);
    assert_eq!(surface.size(), (303, 99));
    assert_eq!(surface.clear_count(), 1);
    assert!(ctl.is_running());
}

#[test]
fn resize_before_start_is_ignored() {
    let mut ctl = controller();
    let mut surface = RecordingSurface::new(300, 150);
    assert!(!ctl.resize(500, 500, &mut surface));
    assert_eq!(surface.size(), (300, 150));
    assert!(ctl.engine().grid().is_degenerate());
}

#[test]
fn stop_then_frames_do_nothing() {
    let (mut ctl, mut surface) = started(400, 300);
    assert!(ctl.stop());
    assert!(!ctl.stop());
    surface.take();

    assert_eq!(ctl.frame(1_000.0, &mut surface), FrameOutcome::Skipped);
    assert_eq!(ctl.loop_state(), LoopState::Idle);
    assert!(surface.ops().is_empty());
}

#[test]
fn resume_continues_from_current_grid() {
    let (mut ctl, mut surface) = started(400, 300);
    ctl.frame(120.0, &mut surface);
    ctl.stop();
    let snapshot = ctl.engine().grid().cells().to_vec();
    let generation = ctl.engine().generation();

    assert_eq!(ctl.resume(60_000.0), Resume::Restarted);
    assert_eq!(ctl.resume(60_001.0), Resume::AlreadyRunning);

    // No reseed and the clock restarted at resume time: a frame inside the
    // interval repaints the same generation.
    let outcome = ctl.frame(60_050.0, &mut surface);
    assert_eq!(outcome, FrameOutcome::Painted(None));
    assert_eq!(ctl.engine().generation(), generation);
    assert_eq!(ctl.engine().grid().cells(), snapshot.as_slice());
}

#[test]
fn reduced_motion_picks_baseline_in_auto_mode() {
    let ctl = HeroController::new(LifeConfig::default(), Box::new(XorShift32::new(1)), true);
    assert_eq!(ctl.strategy(), RenderStrategy::Baseline);

    let config = LifeConfig {
        render_mode: RenderMode::Enhanced,
        ..LifeConfig::default()
    };
    let ctl = HeroController::new(config, Box::new(XorShift32::new(1)), true);
    assert_eq!(ctl.strategy(), RenderStrategy::Enhanced);
}

#[test]
fn stats_follow_generations() {
    let (mut ctl, mut surface) = started(400, 300);
    for f in 1..=10 {
        ctl.frame(f as f64 * 100.0, &mut surface);
    }
    let stats = ctl.stats();
    assert_eq!(stats.generation, 10);
    assert_eq!(stats.frames, 10);
    assert_eq!(stats.reseeds, ctl.engine().reseeds());
}
