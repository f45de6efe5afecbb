use glam::Vec3;
use crate::scene::{Lane, TrackedObject};
use super::*;

fn run(sim: &MotionSimulator, start: Vec3, lane: Lane, ticks: usize) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(ticks);
    let mut position = start;
    for _ in 0..ticks {
        position = sim.advance(position, lane);
        out.push(position);
    }
    out
}

// ============================================================================
// Lane wrap
// ============================================================================

#[test]
fn test_lane_x_wraps() {
    let sim = MotionSimulator::default();
    let next = sim.advance(Vec3::new(-56.0, 3.0, 4.0), Lane::X);
    assert_eq!(next, Vec3::new(40.0, 3.0, 4.0));
}

#[test]
fn test_lane_y_wraps() {
    let sim = MotionSimulator::default();
    let next = sim.advance(Vec3::new(1.0, -31.0, 4.0), Lane::Y);
    assert_eq!(next, Vec3::new(1.0, 250.0, 4.0));
}

#[test]
fn test_lane_z_wraps() {
    let sim = MotionSimulator::default();
    let next = sim.advance(Vec3::new(1.0, 2.0, -11.0), Lane::Z);
    assert_eq!(next, Vec3::new(1.0, 2.0, 120.0));
}

#[test]
fn test_exactly_on_bound_still_moves() {
    let sim = MotionSimulator::default();
    let next = sim.advance(Vec3::new(-55.0, 0.0, 0.0), Lane::X);
    assert_eq!(next, Vec3::new(-55.5, 0.0, 0.0));
}

#[test]
fn test_only_lane_axis_moves() {
    let sim = MotionSimulator::default();
    let start = Vec3::new(10.0, 20.0, 30.0);
    assert_eq!(sim.advance(start, Lane::X), Vec3::new(9.5, 20.0, 30.0));
    assert_eq!(sim.advance(start, Lane::Y), Vec3::new(10.0, 19.5, 30.0));
    assert_eq!(sim.advance(start, Lane::Z), Vec3::new(10.0, 20.0, 29.5));
}

// ============================================================================
// Determinism and speed control
// ============================================================================

#[test]
fn test_motion_is_deterministic() {
    let sim = MotionSimulator::default();
    for lane in Lane::ALL {
        let start = Vec3::new(25.0, 50.0, 50.0);
        assert_eq!(run(&sim, start, lane, 500), run(&sim, start, lane, 500));
    }
}

#[test]
fn test_full_cycle_returns_to_reset_value() {
    let sim = MotionSimulator::default();
    let positions = run(&sim, Vec3::new(40.0, 0.0, 0.0), Lane::X, 400);
    assert!(positions.iter().any(|p| p.x == 40.0));
    assert!(positions.iter().all(|p| p.x >= -55.5 && p.x <= 40.0));
}

#[test]
fn test_reversed_speed_retraces_without_wrapping() {
    let mut sim = MotionSimulator::default();
    let start = Vec3::new(0.0, 0.0, 0.0);
    let forward = run(&sim, start, Lane::X, 20);

    sim.set_move_speed(-sim.move_speed());
    let back = run(&sim, *forward.last().unwrap(), Lane::X, 20);
    assert_eq!(*back.last().unwrap(), start);

    // Going up never wraps: there is no upper bound
    let up = run(&sim, Vec3::new(39.0, 0.0, 0.0), Lane::X, 100);
    assert_eq!(up.last().unwrap().x, 89.0);
}

#[test]
fn test_speed_commands_are_unbounded() {
    let mut sim = MotionSimulator::default();
    assert_eq!(sim.increase_speed(), 1.0);
    assert_eq!(sim.decrease_speed(), 0.5);
    assert_eq!(sim.decrease_speed(), 0.0);
    assert_eq!(sim.decrease_speed(), -0.5);

    let mut object = TrackedObject::new("o", Vec3::ZERO, Vec3::ONE, Lane::Y);
    sim.set_move_speed(0.0);
    assert_eq!(sim.advance_object(&mut object), Vec3::ZERO);
    sim.set_move_speed(-2.0);
    assert_eq!(sim.advance_object(&mut object), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(object.position(), Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn test_lane_bounds_lookup() {
    let sim = MotionSimulator::default();
    assert_eq!(sim.lane_bounds(Lane::Y), LaneBounds::new(-30.0, 250.0));
    assert_eq!(sim.speed_step(), 0.5);
}
