// src/frame_loop/tests.rs

use super::*;
use crate::config::DispatchMode;
use crate::surface::recording::RecordingSurface;
use crate::surface::Framebuffer;
use test_log::test;

const INTERVAL_MS: u64 = 1000;

fn config(cap: usize, dispatch: DispatchMode) -> Config {
    let mut config = Config::default();
    config.waves.max_waves = cap;
    config.waves.spawn_interval_ms = INTERVAL_MS;
    config.performance.dispatch = dispatch;
    config.performance.worker_threads = Some(4);
    config
}

fn frame_loop(cap: usize, dispatch: DispatchMode) -> FrameLoop {
    FrameLoop::from_config(&config(cap, dispatch), Some(1234)).unwrap()
}

/// Steps the loop every `step_ms` up to and including `until_ms`.
fn run_until<S: DrawSurface + Send>(
    frame_loop: &mut FrameLoop,
    surface: &mut S,
    step_ms: u64,
    until_ms: u64,
) {
    let mut now = 0;
    while now <= until_ms {
        frame_loop.step(Duration::from_millis(now), &[], surface);
        now += step_ms;
    }
}

#[test]
fn test_create_no_wave_before_the_first_interval() {
    let mut frame_loop = frame_loop(3, DispatchMode::Sequential);
    let mut surface = RecordingSurface::new();
    run_until(&mut frame_loop, &mut surface, 50, INTERVAL_MS - 1);
    assert!(frame_loop.waves().is_empty());
}

#[test]
fn test_create_one_wave_per_interval_up_to_the_cap() {
    let mut frame_loop = frame_loop(3, DispatchMode::Sequential);
    let mut surface = RecordingSurface::new();
    run_until(&mut frame_loop, &mut surface, 100, 3 * INTERVAL_MS + 10);
    assert_eq!(frame_loop.waves().len(), 3);
}

#[test]
fn test_never_exceed_the_cap() {
    let mut frame_loop = frame_loop(3, DispatchMode::Parallel);
    let mut surface = RecordingSurface::new();
    let mut now = 0;
    for _ in 0..500 {
        frame_loop.step(Duration::from_millis(now), &[], &mut surface);
        assert!(frame_loop.waves().len() <= 3);
        now += 250;
    }
    assert_eq!(frame_loop.waves().len(), 3);
}

#[test]
fn test_draw_a_new_wave_only_from_the_next_frame() {
    let mut frame_loop = frame_loop(5, DispatchMode::Sequential);
    let mut surface = RecordingSurface::new();

    frame_loop.step(Duration::from_millis(INTERVAL_MS), &[], &mut surface);
    assert_eq!(frame_loop.waves().len(), 1);
    assert!(surface.drawn_points().is_empty());
    assert_eq!(frame_loop.waves()[0].phase(), 0.0);

    frame_loop.step(Duration::from_millis(INTERVAL_MS + 16), &[], &mut surface);
    let wave = &frame_loop.waves()[0];
    assert_eq!(surface.drawn_points().len(), wave.length() as usize);
    assert_eq!(wave.phase(), wave.speed());
}

#[test]
fn test_clear_to_the_background_every_frame() {
    let mut frame_loop = frame_loop(5, DispatchMode::Sequential);
    let mut surface = RecordingSurface::new();
    run_until(&mut frame_loop, &mut surface, 500, 2000);
    let clears = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, crate::surface::recording::SurfaceOp::Clear(c) if *c == Color::BLACK))
        .count();
    assert_eq!(clears, 5);
}

#[test]
fn test_quit_on_close_but_still_draw_the_frame() {
    let mut frame_loop = frame_loop(5, DispatchMode::Parallel);
    let mut surface = RecordingSurface::new();
    run_until(&mut frame_loop, &mut surface, 500, 2500);
    assert_eq!(frame_loop.status(), LoopStatus::Running);
    let waves_before = frame_loop.waves().len();

    let status = frame_loop.step(
        Duration::from_millis(2600),
        &[DisplayEvent::FocusLost, DisplayEvent::CloseRequested],
        &mut surface,
    );
    assert_eq!(status, LoopStatus::Quit);
    assert_eq!(frame_loop.status(), LoopStatus::Quit);
    assert_eq!(surface.drawn_points().len(), waves_before * 100);

    // Quit is terminal.
    let status = frame_loop.step(Duration::from_millis(2700), &[], &mut surface);
    assert_eq!(status, LoopStatus::Quit);
}

#[test]
fn test_draw_the_same_points_in_parallel_and_sequentially() {
    let mut sequential = frame_loop(20, DispatchMode::Sequential);
    let mut parallel = frame_loop(20, DispatchMode::Parallel);
    let mut seq_surface = RecordingSurface::new();
    let mut par_surface = RecordingSurface::new();

    let mut now = 0;
    for _ in 0..120 {
        sequential.step(Duration::from_millis(now), &[], &mut seq_surface);
        parallel.step(Duration::from_millis(now), &[], &mut par_surface);
        assert_eq!(seq_surface.sorted_points(), par_surface.sorted_points());
        now += 200;
    }
    assert_eq!(sequential.waves(), parallel.waves());
    assert!(!seq_surface.drawn_points().is_empty());
}

#[test]
fn test_keep_each_wave_in_a_single_color_under_parallel_dispatch() {
    let mut parallel = frame_loop(30, DispatchMode::Parallel);
    let mut surface = RecordingSurface::new();
    run_until(&mut parallel, &mut surface, 1000, 31_000);

    // Every run of points between two color changes belongs to exactly one
    // wave, so each run has exactly `length` points.
    let ops = surface.ops();
    let frame_start = ops
        .iter()
        .rposition(|op| matches!(op, crate::surface::recording::SurfaceOp::Clear(_)))
        .unwrap();
    let mut run = 0;
    let mut runs = Vec::new();
    for op in &ops[frame_start + 1..] {
        match op {
            crate::surface::recording::SurfaceOp::SetDrawColor(_) => {
                if run > 0 {
                    runs.push(run);
                }
                run = 0;
            }
            crate::surface::recording::SurfaceOp::Point(_) => run += 1,
            crate::surface::recording::SurfaceOp::Clear(_) => unreachable!(),
        }
    }
    runs.push(run);
    assert_eq!(runs.len(), 30);
    assert!(runs.iter().all(|&n| n == 100), "{:?}", runs);
}

#[test]
fn test_render_into_a_framebuffer() {
    let mut frame_loop = frame_loop(4, DispatchMode::Parallel);
    let mut fb = Framebuffer::new(800, 600, Color::BLACK);
    run_until(&mut frame_loop, &mut fb, 250, 5000);
    assert_eq!(frame_loop.waves().len(), 4);
    assert!(fb.pixels().iter().any(|&p| p != Color::BLACK.packed()));
}

#[test]
fn test_report_its_dispatch_mode() {
    assert_eq!(
        frame_loop(1, DispatchMode::Sequential).dispatcher().mode(),
        DispatchMode::Sequential
    );
    assert_eq!(
        frame_loop(1, DispatchMode::Parallel).dispatcher().mode(),
        DispatchMode::Parallel
    );
}

#[test]
fn test_pause_wave_creation_while_unfocused() {
    let mut frame_loop = frame_loop(5, DispatchMode::Sequential);
    let mut surface = RecordingSurface::new();

    run_until(&mut frame_loop, &mut surface, 500, INTERVAL_MS);
    assert_eq!(frame_loop.waves().len(), 1);

    frame_loop.step(Duration::from_millis(1100), &[DisplayEvent::FocusLost], &mut surface);
    assert!(!frame_loop.is_spawning());
    let mut now = 1200;
    while now <= 5000 {
        frame_loop.step(Duration::from_millis(now), &[], &mut surface);
        now += 100;
    }
    assert_eq!(frame_loop.waves().len(), 1);
    // Existing waves keep moving while paused.
    assert_eq!(surface.drawn_points().len(), 100);

    frame_loop.step(Duration::from_millis(5100), &[DisplayEvent::FocusGained], &mut surface);
    assert!(frame_loop.is_spawning());
    frame_loop.step(Duration::from_millis(6000), &[], &mut surface);
    assert_eq!(frame_loop.waves().len(), 1);
    frame_loop.step(Duration::from_millis(6100), &[], &mut surface);
    assert_eq!(frame_loop.waves().len(), 2);
}
