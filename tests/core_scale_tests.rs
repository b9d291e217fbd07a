use approx::assert_relative_eq;
use submission_charts::core::{
    BandScale, LinearScale, ZoomAxis, ZoomTransform, format_tick, linear_ticks, tick_precision,
    tick_step,
};

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((6.0, 94.0), (370.0, 0.0)).expect("valid scale");

    let px = scale.domain_to_pixel(42.5).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert_relative_eq!(recovered, 42.5, epsilon = 1e-9);
}

#[test]
fn non_finite_input_is_rejected() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.domain_to_pixel(f64::NAN).is_err());
    assert!(scale.pixel_to_domain(f64::INFINITY).is_err());
}

#[test]
fn ticks_use_round_steps() {
    assert_eq!(linear_ticks(6.0, 94.0, 5), vec![20.0, 40.0, 60.0, 80.0]);
    assert_relative_eq!(tick_step(0.0, 1.0, 10).expect("step"), 0.1);
    assert_eq!(linear_ticks(5.0, 5.0, 5), Vec::<f64>::new());
}

#[test]
fn tick_labels_follow_step_precision() {
    assert_eq!(tick_precision(0.1), 1);
    assert_eq!(tick_precision(20.0), 0);
    assert_eq!(format_tick(0.30000000000000004, 1), "0.3");
    assert_eq!(format_tick(-0.0, 0), "0");
}

#[test]
fn zoom_in_about_center_halves_visible_domain() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 800.0)).expect("valid scale");
    let zoom = ZoomTransform::scale_about(2.0, 400.0, 0.0);

    let zoomed = scale.rescaled(zoom, ZoomAxis::X).expect("rescaled");
    let (start, end) = zoomed.domain();
    assert_relative_eq!(start, 25.0);
    assert_relative_eq!(end, 75.0);
    assert_eq!(zoomed.range(), (0.0, 800.0));
}

#[test]
fn pan_shifts_domain_against_drag_direction() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 800.0)).expect("valid scale");
    let pan = ZoomTransform::translate(80.0, 0.0);

    let panned = scale.rescaled(pan, ZoomAxis::X).expect("rescaled");
    let (start, end) = panned.domain();
    assert_relative_eq!(start, -10.0);
    assert_relative_eq!(end, 90.0);
}

#[test]
fn composed_transform_matches_sequential_rescale() {
    let scale = LinearScale::new((0.0, 100.0), (370.0, 0.0)).expect("valid scale");
    let first = ZoomTransform::scale_about(1.5, 0.0, 100.0);
    let second = ZoomTransform::translate(0.0, -20.0);

    let composed = scale
        .rescaled(first.then(second), ZoomAxis::Y)
        .expect("composed");
    let value = 40.0;
    let px = first.then(second).apply(scale.domain_to_pixel(value).expect("px"), ZoomAxis::Y);
    assert_relative_eq!(composed.pixel_to_domain(px).expect("back"), value, epsilon = 1e-9);
}

#[test]
fn band_scale_keeps_first_seen_order() {
    let scale = BandScale::new(["zeta", "alpha", "mid"], 600.0).expect("band scale");
    let centers: Vec<(&str, f64)> = scale.centers().collect();
    assert_eq!(centers, vec![("zeta", 100.0), ("alpha", 300.0), ("mid", 500.0)]);
}

#[test]
fn band_scale_rejects_empty_width() {
    assert!(BandScale::new(["a"], 0.0).is_err());
}
