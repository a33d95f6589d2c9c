use voicebridge::domain::SliderRange;
use voicebridge::domain::slider_range::{
    DIFFUSION_STEPS, INFERENCE_CFG_RATE, LENGTH_ADJUST, PITCH_SHIFT,
};

#[test]
fn given_declared_sliders_when_inspected_then_bounds_match_interface_contract() {
    assert_eq!((PITCH_SHIFT.min, PITCH_SHIFT.max), (-12.0, 12.0));
    assert_eq!((DIFFUSION_STEPS.min, DIFFUSION_STEPS.max), (4.0, 50.0));
    assert_eq!((LENGTH_ADJUST.min, LENGTH_ADJUST.max), (0.5, 2.0));
    assert_eq!((INFERENCE_CFG_RATE.min, INFERENCE_CFG_RATE.max), (0.0, 1.0));
}

#[test]
fn given_declared_sliders_when_inspected_then_defaults_lie_inside_their_range() {
    for range in [DIFFUSION_STEPS, LENGTH_ADJUST, INFERENCE_CFG_RATE, PITCH_SHIFT] {
        assert!(range.contains(range.default), "{:?}", range);
    }
}

#[test]
fn given_in_range_value_when_clamping_then_returns_it_unchanged() {
    assert_eq!(LENGTH_ADJUST.clamp(1.25), 1.25);
    assert_eq!(PITCH_SHIFT.clamp(-12.0), -12.0);
}

#[test]
fn given_out_of_range_value_when_clamping_then_pins_to_nearest_bound() {
    let range = SliderRange::new(0.0, 1.0, 0.1, 0.7);

    assert_eq!(range.clamp(3.0), 1.0);
    assert_eq!(range.clamp(-0.5), 0.0);
}

#[test]
fn given_nan_when_clamping_then_returns_default() {
    assert_eq!(INFERENCE_CFG_RATE.clamp(f64::NAN), 0.7);
}

#[test]
fn given_declared_sliders_when_checking_step_then_only_steps_and_pitch_are_whole_numbers() {
    assert!(DIFFUSION_STEPS.is_integral());
    assert!(PITCH_SHIFT.is_integral());
    assert!(!LENGTH_ADJUST.is_integral());
    assert!(!INFERENCE_CFG_RATE.is_integral());
}
