use std::fmt;
use std::str::FromStr;

use super::audio_clip::{AudioClip, AudioMetadata};
use super::conversion_params::ConversionParams;

/// The voice the source should be converted into.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetVoice {
    Reference(AudioClip),
    Named(String),
    Unspecified,
}

impl TargetVoice {
    pub fn describe(&self) -> String {
        match self {
            TargetVoice::Reference(clip) => format!("reference clip {}", clip.filename),
            TargetVoice::Named(name) => format!("voice '{}'", name),
            TargetVoice::Unspecified => "no target voice".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: Option<AudioClip>,
    pub target: TargetVoice,
    pub params: ConversionParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub audio: Option<AudioClip>,
    pub status: String,
    pub source_metadata: Option<AudioMetadata>,
    pub params: ConversionParams,
}

/// Stand-in behaviour while no conversion routine is wired to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderMode {
    /// Return the source clip untouched.
    #[default]
    Echo,
    /// Report that conversion is not implemented.
    NotImplemented,
}

impl PlaceholderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderMode::Echo => "echo",
            PlaceholderMode::NotImplemented => "not-implemented",
        }
    }
}

impl FromStr for PlaceholderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "echo" => Ok(PlaceholderMode::Echo),
            "not-implemented" | "not_implemented" => Ok(PlaceholderMode::NotImplemented),
            other => Err(format!(
                "Invalid placeholder mode: {}. Expected: echo or not-implemented",
                other
            )),
        }
    }
}

impl fmt::Display for PlaceholderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
