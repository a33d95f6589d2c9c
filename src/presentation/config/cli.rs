use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::application::services::BootstrapOptions;
use crate::domain::{
    ComputeDevice, DEFAULT_HUB_CHECKPOINT, DEFAULT_HUB_CONFIG, DEFAULT_HUB_REPO, PlaceholderMode,
    Precision, RemoteArtifact,
};

/// Outcome returned while the conversion routine is a stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PlaceholderArg {
    /// Return the uploaded source clip unchanged.
    Echo,
    /// Answer every conversion with a not-implemented status.
    NotImplemented,
}

impl From<PlaceholderArg> for PlaceholderMode {
    fn from(arg: PlaceholderArg) -> Self {
        match arg {
            PlaceholderArg::Echo => PlaceholderMode::Echo,
            PlaceholderArg::NotImplemented => PlaceholderMode::NotImplemented,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "voicebridge")]
#[command(about = "Web front-end for a pretrained voice-conversion model", long_about = None)]
pub struct CliArgs {
    /// Request a public share link. Accepted for compatibility, the server only binds locally.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub share: bool,
    /// Local model checkpoint (.safetensors or PyTorch pickle). Requires --config.
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,
    /// Local model settings file (YAML). Requires --checkpoint.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Cast model weights to half precision.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub fp16: bool,
    /// Hub repository used when no local checkpoint is given.
    #[arg(long, default_value = DEFAULT_HUB_REPO)]
    pub hf_repo: String,
    /// Checkpoint file inside the hub repository.
    #[arg(long, default_value = DEFAULT_HUB_CHECKPOINT)]
    pub hf_checkpoint: String,
    /// Settings file inside the hub repository.
    #[arg(long, default_value = DEFAULT_HUB_CONFIG)]
    pub hf_config: String,
    /// Placeholder outcome for conversions.
    #[arg(long, value_enum, default_value_t = PlaceholderArg::Echo)]
    pub placeholder: PlaceholderArg,
}

impl CliArgs {
    pub fn precision(&self) -> Precision {
        Precision::from_fp16_flag(self.fp16)
    }

    pub fn remote_artifact(&self) -> RemoteArtifact {
        RemoteArtifact {
            repo_id: self.hf_repo.clone(),
            checkpoint_file: self.hf_checkpoint.clone(),
            config_file: self.hf_config.clone(),
        }
    }

    pub fn bootstrap_options(&self, device: ComputeDevice) -> BootstrapOptions {
        BootstrapOptions {
            checkpoint: self.checkpoint.clone(),
            config: self.config.clone(),
            remote: self.remote_artifact(),
            device,
            precision: self.precision(),
        }
    }
}
