mod page;
mod widget;

use serde::Serialize;

use crate::domain::slider_range::{
    DIFFUSION_STEPS, INFERENCE_CFG_RATE, LENGTH_ADJUST, PITCH_SHIFT,
};

pub use page::render_page;
pub use widget::{Action, Widget};

pub const CONVERT_PATH: &str = "/api/v1/convert";

/// Multipart field names shared by the page and the convert handler.
pub mod fields {
    pub const SOURCE_AUDIO: &str = "source_audio";
    pub const TARGET_AUDIO: &str = "target_audio";
    pub const TARGET_VOICE: &str = "target_voice";
    pub const DIFFUSION_STEPS: &str = "diffusion_steps";
    pub const LENGTH_ADJUST: &str = "length_adjust";
    pub const INFERENCE_CFG_RATE: &str = "inference_cfg_rate";
    pub const PITCH_SHIFT: &str = "pitch_shift";
    pub const CONVERTED_AUDIO: &str = "converted_audio";
    pub const STATUS: &str = "status";
}

/// Declared widgets and the action they feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub title: &'static str,
    pub description: &'static str,
    pub inputs: Vec<Widget>,
    pub outputs: Vec<Widget>,
    pub action: Action,
}

impl Interface {
    pub fn voice_conversion() -> Self {
        Self {
            title: "Voice Conversion",
            description: "Upload a source clip and a reference voice, tune the sliders, then convert.",
            inputs: vec![
                Widget::Audio {
                    name: fields::SOURCE_AUDIO,
                    label: "Source audio",
                },
                Widget::Audio {
                    name: fields::TARGET_AUDIO,
                    label: "Reference voice",
                },
                Widget::Text {
                    name: fields::TARGET_VOICE,
                    label: "Target voice name",
                    placeholder: "optional, used when no reference clip is uploaded",
                },
                Widget::slider(fields::DIFFUSION_STEPS, "Diffusion steps", DIFFUSION_STEPS),
                Widget::slider(fields::LENGTH_ADJUST, "Length adjust", LENGTH_ADJUST),
                Widget::slider(
                    fields::INFERENCE_CFG_RATE,
                    "Inference CFG rate",
                    INFERENCE_CFG_RATE,
                ),
                Widget::slider(fields::PITCH_SHIFT, "Pitch shift (semitones)", PITCH_SHIFT),
            ],
            outputs: vec![
                Widget::Audio {
                    name: fields::CONVERTED_AUDIO,
                    label: "Converted audio",
                },
                Widget::Text {
                    name: fields::STATUS,
                    label: "Status",
                    placeholder: "",
                },
            ],
            action: Action {
                label: "Convert",
                method: "POST",
                path: CONVERT_PATH,
            },
        }
    }

    pub fn input(&self, name: &str) -> Option<&Widget> {
        self.inputs.iter().find(|w| w.name() == name)
    }
}
