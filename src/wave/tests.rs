// src/wave/tests.rs

use super::*;
use crate::config::WaveConfig;
use std::f32::consts::TAU;

fn wave_with_speed(speed: f32) -> Wave {
    Wave::new(WaveParams {
        amplitude: 50.0,
        frequency: 0.05,
        speed,
        start_x: 10,
        start_y: 20,
        direction_x: 0.5,
        direction_y: -0.25,
        color: Color::from_rgb(10, 20, 30),
        length: 100,
    })
}

#[test]
fn test_start_at_phase_zero() {
    assert_eq!(wave_with_speed(0.01).phase(), 0.0);
}

#[test]
fn test_advance_the_phase_by_speed() {
    let mut wave = wave_with_speed(0.25);
    wave.update_position();
    assert_eq!(wave.phase(), 0.25);
    wave.update_position();
    assert_eq!(wave.phase(), 0.5);
}

#[test]
fn test_wrap_the_phase_at_a_full_cycle() {
    let mut wave = wave_with_speed(2.0);
    for _ in 0..3 {
        wave.update_position();
    }
    // 6.0 is still below 2π; the fourth step crosses it.
    assert!((wave.phase() - 6.0).abs() < 1e-6);
    wave.update_position();
    assert!((wave.phase() - (8.0 - TAU)).abs() < 1e-5);
    assert!(wave.phase() >= 0.0 && wave.phase() < TAU);
}

#[test]
fn test_track_n_times_speed_modulo_two_pi() {
    let mut factory = WaveFactory::seeded(7, WaveConfig::default());
    for _ in 0..20 {
        let mut wave = factory.create_wave(800, 600);
        let steps = 5_000u32;
        for _ in 0..steps {
            wave.update_position();
            assert!(wave.phase() >= 0.0 && wave.phase() < TAU);
        }
        let expected = (steps as f64 * wave.speed() as f64).rem_euclid(TAU as f64);
        let diff = (wave.phase() as f64 - expected).abs();
        // Accumulated f32 rounding; also accept a result that landed on the
        // other side of the wrap point.
        let diff = diff.min((diff - TAU as f64).abs());
        assert!(diff < 1e-2, "phase {} expected {}", wave.phase(), expected);
    }
}

#[test]
fn test_never_change_the_creation_parameters() {
    let mut wave = wave_with_speed(0.3);
    let before = *wave.params();
    for _ in 0..1_000 {
        wave.update_position();
    }
    assert_eq!(*wave.params(), before);
}
