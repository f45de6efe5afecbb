//! Integration tests for the visibility pipeline
//!
//! Drives the public API the way a host engine would: build a camera and
//! an object store, create the orchestrator, feed commands and ticks, and
//! read the visibility flags back.
//!
//! Run with: cargo test --test visibility_integration_tests

use galaxy_3d_visibility::galaxy3d::VisibilityConfig;
use galaxy_3d_visibility::galaxy3d::camera::{Camera, CameraControl, CameraPreset, CameraView, Pose};
use galaxy_3d_visibility::galaxy3d::scene::{
    Command, Lane, ObjectStore, SceneLayout, TrackedObject, VisibilityOrchestrator,
    intersects, any_intersects,
};
use galaxy_3d_visibility::glam::Vec3;

// ============================================================================
// END-TO-END SCENARIOS
// ============================================================================

#[test]
fn test_integration_stationary_frustum_scenario() {
    let camera = Camera::new(Pose::new(Vec3::new(0.0, -5000.0, 0.0), Vec3::NEG_Y, Vec3::Z));
    let config = VisibilityConfig { initial_move_speed: 0.0, ..VisibilityConfig::default() };
    let mut orchestrator = VisibilityOrchestrator::new(&config, &camera).unwrap();

    let mut objects = ObjectStore::new();
    let at_apex = objects.insert(TrackedObject::new("apex", Vec3::new(-50.0, 75.0, 50.0), Vec3::splat(0.5), Lane::X));
    let off_axis = objects.insert(TrackedObject::new("far", Vec3::new(-50.0, 75.0, 10_050.0), Vec3::splat(0.5), Lane::X));

    orchestrator.tick(&camera, &mut objects);

    assert!(objects.get(at_apex).unwrap().is_visible());
    assert!(!objects.get(off_axis).unwrap().is_visible());
}

#[test]
fn test_integration_flags_equal_union_of_both_frustums() {
    let mut camera = Camera::at(Vec3::new(15.0, 15.0, 10.0));
    let mut orchestrator = VisibilityOrchestrator::new(&VisibilityConfig::default(), &camera).unwrap();
    let mut objects = ObjectStore::new();
    let keys = SceneLayout::default().populate(&mut objects);

    let presets = [CameraPreset::Overview, CameraPreset::Corridor, CameraPreset::Overhead, CameraPreset::AxisAligned];
    for tick in 0..600 {
        if tick % 150 == 0 {
            orchestrator.handle_command(Command::ApplyCameraPreset(presets[tick / 150]), &mut camera);
        }
        orchestrator.tick(&camera, &mut objects);

        for key in &keys {
            let object = objects.get(*key).unwrap();
            let volume = object.bounding_volume();
            let stationary = intersects(&volume, orchestrator.stationary_frustum());
            let attached = intersects(&volume, orchestrator.camera_frustum());
            assert_eq!(object.is_visible(), stationary || attached);
            assert_eq!(
                object.is_visible(),
                any_intersects(&volume, [orchestrator.stationary_frustum(), orchestrator.camera_frustum()])
            );
        }
    }
}

#[test]
fn test_integration_objects_stay_on_their_lane() {
    let camera = Camera::default();
    let mut orchestrator = VisibilityOrchestrator::new(&VisibilityConfig::default(), &camera).unwrap();
    let mut objects = ObjectStore::new();
    let keys = SceneLayout::default().populate(&mut objects);

    for _ in 0..1000 {
        orchestrator.tick(&camera, &mut objects);
    }

    for (index, key) in keys.iter().enumerate() {
        let start = SceneLayout::spawn_position(index);
        let now = objects.get(*key).unwrap().position();
        let axis = SceneLayout::lane(index).index();
        for other in (0..3).filter(|a| *a != axis) {
            assert_eq!(now[other], start[other], "object {} drifted off its lane", index);
        }
        let bounds = orchestrator.motion().lane_bounds(SceneLayout::lane(index));
        assert!(now[axis] >= bounds.wrap_below - orchestrator.move_speed());
    }
}

#[test]
fn test_integration_speed_commands_change_step() {
    let mut camera = Camera::default();
    let mut orchestrator = VisibilityOrchestrator::new(&VisibilityConfig::default(), &camera).unwrap();
    let mut objects = ObjectStore::new();
    let key = objects.insert(TrackedObject::new("s", Vec3::new(0.0, 0.0, 0.0), Vec3::ONE, Lane::X));

    orchestrator.handle_command(Command::IncreaseSpeed, &mut camera);
    orchestrator.handle_command(Command::IncreaseSpeed, &mut camera);
    orchestrator.tick(&camera, &mut objects);
    assert_eq!(objects.get(key).unwrap().position().x, -1.5);

    orchestrator.handle_command(Command::DecreaseSpeed, &mut camera);
    orchestrator.tick(&camera, &mut objects);
    assert_eq!(objects.get(key).unwrap().position().x, -2.5);
}

#[test]
fn test_integration_axis_aligned_preset_restores_orientation() {
    let mut camera = Camera::new(Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec3::X));
    let mut orchestrator = VisibilityOrchestrator::new(&VisibilityConfig::default(), &camera).unwrap();

    orchestrator.handle_command(Command::ApplyCameraPreset(CameraPreset::AxisAligned), &mut camera);
    camera.set_position(Vec3::new(9.0, 9.0, 9.0));
    let mut objects = ObjectStore::new();
    orchestrator.tick(&camera, &mut objects);

    assert_eq!(orchestrator.camera_frustum().look_direction(), Vec3::X);
    assert_eq!(orchestrator.camera_frustum().normal_direction(), Vec3::Z);
    assert_eq!(orchestrator.camera_frustum().position(), camera.position());
}
