#[cfg(feature = "integration-tests")]
use orbit_demo::{config::DemoConfig, offscreen::render_frame};

#[test]
#[cfg(feature = "integration-tests")]
fn should_clear_to_white_and_draw_the_scene() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let config = DemoConfig::default();
    let frame = runtime.block_on(render_frame(&config)).unwrap();

    assert_eq!(frame.dimensions(), (config.width, config.height));

    let white = image::Rgba([255, 255, 255, 255]);
    let (w, h) = frame.dimensions();
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        assert_eq!(*frame.get_pixel(x, y), white, "corner ({}, {}) is not clear", x, y);
    }

    let drawn = frame.pixels().filter(|p| **p != white).count();
    assert!(drawn > 0, "nothing was drawn over the clear colour");
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_yellow_spheres() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let frame = runtime.block_on(render_frame(&DemoConfig::default())).unwrap();

    // lit yellow: red and green well above blue
    let yellow = frame
        .pixels()
        .filter(|p| p[0] > 80 && p[1] > 80 && p[2] < 40)
        .count();
    assert!(yellow > 0, "no yellow pixels in the frame");
}
