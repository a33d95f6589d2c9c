use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_HUB_REPO: &str = "Plachta/Seed-VC";
pub const DEFAULT_HUB_CHECKPOINT: &str = "DiT_seed_v2_uvit_whisper_small_wavenet_bigvgan_pruned.pth";
pub const DEFAULT_HUB_CONFIG: &str = "config_dit_mel_seed_uvit_whisper_small_wavenet.yml";

/// A checkpoint/settings pair published under a hub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteArtifact {
    pub repo_id: String,
    pub checkpoint_file: String,
    pub config_file: String,
}

impl Default for RemoteArtifact {
    fn default() -> Self {
        Self {
            repo_id: DEFAULT_HUB_REPO.to_string(),
            checkpoint_file: DEFAULT_HUB_CHECKPOINT.to_string(),
            config_file: DEFAULT_HUB_CONFIG.to_string(),
        }
    }
}

/// Where the model and its settings come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum ModelSource {
    Local { checkpoint: PathBuf, config: PathBuf },
    Remote(RemoteArtifact),
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Local { checkpoint, config } => write!(
                f,
                "local:{} (config {})",
                checkpoint.display(),
                config.display()
            ),
            ModelSource::Remote(artifact) => {
                write!(f, "hub:{}/{}", artifact.repo_id, artifact.checkpoint_file)
            }
        }
    }
}
