use serde::Serialize;

use crate::domain::SliderRange;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Widget {
    Audio {
        name: &'static str,
        label: &'static str,
    },
    Text {
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
    },
    Slider {
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
}

impl Widget {
    pub fn slider(name: &'static str, label: &'static str, range: SliderRange) -> Self {
        Widget::Slider {
            name,
            label,
            min: range.min,
            max: range.max,
            step: range.step,
            default: range.default,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Widget::Audio { name, .. }
            | Widget::Text { name, .. }
            | Widget::Slider { name, .. } => name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Widget::Audio { label, .. }
            | Widget::Text { label, .. }
            | Widget::Slider { label, .. } => label,
        }
    }
}

/// The single trigger a page submits to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub label: &'static str,
    pub method: &'static str,
    pub path: &'static str,
}
