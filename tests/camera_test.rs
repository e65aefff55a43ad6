use std::time::Duration;

use orbit_demo::{
    camera::{CameraController, OrbitCamera},
    config::DemoConfig,
};
use winit::{event::ElementState, keyboard::KeyCode};

fn start() -> (OrbitCamera, CameraController) {
    let config = DemoConfig::default();
    (
        OrbitCamera::new(config.camera_angle, config.camera_height, config.camera_radius),
        CameraController::new(config.orbit_speed, config.climb_speed),
    )
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn camera_starts_behind_the_origin_looking_forward() {
    let (camera, _) = start();
    let eye = camera.eye();
    assert!(approx(eye.x, 0.0));
    assert!(approx(eye.y, 5.0));
    assert!(approx(eye.z, -7.0));
}

#[test]
fn camera_stays_put_without_input() {
    let (mut camera, controller) = start();
    let before = camera;
    controller.update(&mut camera, Duration::from_secs(1));
    assert_eq!(camera, before);
}

#[test]
fn left_and_right_orbit_at_half_a_radian_per_second() {
    let (mut camera, mut controller) = start();
    let start_angle = camera.angle.0;

    assert!(controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed));
    controller.update(&mut camera, Duration::from_secs(2));
    assert!(approx(camera.angle.0, start_angle - 1.0));

    controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Released);
    controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
    controller.update(&mut camera, Duration::from_millis(500));
    assert!(approx(camera.angle.0, start_angle - 0.75));
}

#[test]
fn up_and_down_climb_at_five_units_per_second() {
    let (mut camera, mut controller) = start();

    controller.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
    controller.update(&mut camera, Duration::from_millis(200));
    assert!(approx(camera.height, 6.0));

    controller.process_keyboard(KeyCode::ArrowUp, ElementState::Released);
    controller.process_keyboard(KeyCode::ArrowDown, ElementState::Pressed);
    controller.update(&mut camera, Duration::from_secs(3));
    assert!(approx(camera.height, -9.0));
}

#[test]
fn opposite_keys_cancel_out() {
    let (mut camera, mut controller) = start();
    let before = camera;
    for key in [
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
    ] {
        controller.process_keyboard(key, ElementState::Pressed);
    }
    controller.update(&mut camera, Duration::from_secs(1));
    assert!(approx(camera.angle.0, before.angle.0));
    assert!(approx(camera.height, before.height));
}

#[test]
fn releasing_everything_stops_the_camera() {
    let (mut camera, mut controller) = start();
    controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
    controller.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
    controller.release_all();
    let before = camera;
    controller.update(&mut camera, Duration::from_secs(1));
    assert_eq!(camera, before);
}

#[test]
fn other_keys_are_not_consumed() {
    let (_, mut controller) = start();
    assert!(!controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
    assert!(!controller.process_keyboard(KeyCode::Escape, ElementState::Pressed));
}

#[test]
fn a_quarter_orbit_moves_the_eye_onto_the_x_axis() {
    let (mut camera, mut controller) = start();
    controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
    // pi/2 radians at 0.5 rad/s
    controller.update(&mut camera, Duration::from_secs_f32(std::f32::consts::PI));
    let eye = camera.eye();
    assert!(approx(camera.angle.0, 2.0 * std::f32::consts::PI));
    assert!(approx(eye.x, 7.0));
    assert!(approx(eye.z, 0.0));
    assert_eq!(camera.radius, 7.0);
}
