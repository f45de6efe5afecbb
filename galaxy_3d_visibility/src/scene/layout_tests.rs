use glam::{Mat3, Vec3};
use crate::scene::{Lane, ObjectStore};
use super::*;

#[test]
fn test_lane_assignment_cycles() {
    assert_eq!(SceneLayout::lane(0), Lane::X);
    assert_eq!(SceneLayout::lane(1), Lane::Y);
    assert_eq!(SceneLayout::lane(2), Lane::Z);
    assert_eq!(SceneLayout::lane(14), Lane::Z);
}

#[test]
fn test_spawn_positions() {
    // sphere, even
    assert_eq!(SceneLayout::spawn_position(0), Vec3::new(25.0, 50.0, 50.0));
    // sphere, odd
    assert_eq!(SceneLayout::spawn_position(3), Vec3::new(16.0, 59.0, 41.0));
    // rocket, odd
    assert_eq!(SceneLayout::spawn_position(1), Vec3::new(-8.0, 247.0, 47.0));
    // rocket, even
    assert_eq!(SceneLayout::spawn_position(4), Vec3::new(7.0, 262.0, 62.0));
    // frog, even
    assert_eq!(SceneLayout::spawn_position(2), Vec3::new(-1.0, 81.0, 116.0));
    // frog, odd
    assert_eq!(SceneLayout::spawn_position(5), Vec3::new(-15.0, 60.0, 95.0));
}

#[test]
fn test_object_uses_kind_extents_and_transform() {
    let layout = SceneLayout {
        rocket_extents: Vec3::new(1.0, 6.0, 1.0),
        ..SceneLayout::default()
    };
    let rocket = layout.object(1);
    assert_eq!(rocket.label(), "rocket_1");
    assert_eq!(rocket.half_extents(), Vec3::new(0.5, 3.0, 0.5));
    assert_eq!(*rocket.transform(), Mat3::from_rotation_x(std::f32::consts::FRAC_PI_2));
    assert!(!rocket.is_visible());

    let sphere = layout.object(0);
    assert_eq!(*sphere.transform(), Mat3::IDENTITY);
    assert_eq!(sphere.half_extents(), Vec3::splat(0.5));
}

#[test]
fn test_populate_inserts_all_objects_in_order() {
    let mut store = ObjectStore::new();
    let keys = SceneLayout::default().populate(&mut store);
    assert_eq!(keys.len(), DEFAULT_OBJECT_COUNT);
    assert_eq!(store.len(), DEFAULT_OBJECT_COUNT);
    for (index, key) in keys.iter().enumerate() {
        let object = store.get(*key).unwrap();
        assert_eq!(object.lane(), SceneLayout::lane(index));
        assert_eq!(object.position(), SceneLayout::spawn_position(index));
    }
}
