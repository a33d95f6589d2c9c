mod symphonia_inspector;

pub use symphonia_inspector::{SymphoniaAudioInspector, probe_audio};
