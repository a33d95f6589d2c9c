use voicebridge::presentation::Interface;
use voicebridge::presentation::interface::{Widget, fields, render_page};

#[test]
fn given_voice_conversion_interface_when_built_then_declares_all_inputs() {
    let interface = Interface::voice_conversion();

    for name in [
        fields::SOURCE_AUDIO,
        fields::TARGET_AUDIO,
        fields::TARGET_VOICE,
        fields::DIFFUSION_STEPS,
        fields::LENGTH_ADJUST,
        fields::INFERENCE_CFG_RATE,
        fields::PITCH_SHIFT,
    ] {
        assert!(interface.input(name).is_some(), "missing input {}", name);
    }
}

#[test]
fn given_pitch_slider_when_inspected_then_carries_semitone_range() {
    let interface = Interface::voice_conversion();

    match interface.input(fields::PITCH_SHIFT) {
        Some(Widget::Slider {
            min, max, default, ..
        }) => {
            assert_eq!(*min, -12.0);
            assert_eq!(*max, 12.0);
            assert_eq!(*default, 0.0);
        }
        other => panic!("expected slider, got {:?}", other),
    }
}

#[test]
fn given_interface_when_serialized_then_widgets_are_tagged_by_type() {
    let json = serde_json::to_value(Interface::voice_conversion()).unwrap();

    assert_eq!(json["inputs"][0]["type"], "audio");
    assert_eq!(json["inputs"][2]["type"], "text");
    assert_eq!(json["inputs"][3]["type"], "slider");
    assert_eq!(json["outputs"][1]["name"], "status");
}

#[test]
fn given_interface_when_rendered_then_outputs_have_audio_player_and_status() {
    let html = render_page(&Interface::voice_conversion());

    assert!(html.contains("<audio id=\"converted_audio\" controls></audio>"));
    assert!(html.contains("<div id=\"status\"></div>"));
    assert!(html.contains("enctype=\"multipart/form-data\""));
}
