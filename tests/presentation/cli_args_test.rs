use std::path::PathBuf;

use clap::Parser;

use voicebridge::domain::{ComputeDevice, DEFAULT_HUB_REPO, PlaceholderMode, Precision};
use voicebridge::presentation::{CliArgs, PlaceholderArg};

#[test]
fn given_no_flags_when_parsing_then_uses_remote_default_fp16_and_no_share() {
    let args = CliArgs::try_parse_from(["voicebridge"]).unwrap();

    assert!(!args.share);
    assert!(args.fp16);
    assert!(args.checkpoint.is_none());
    assert!(args.config.is_none());
    assert_eq!(args.hf_repo, DEFAULT_HUB_REPO);
    assert_eq!(args.placeholder, PlaceholderArg::Echo);
}

#[test]
fn given_bare_share_flag_when_parsing_then_enables_share() {
    let args = CliArgs::try_parse_from(["voicebridge", "--share"]).unwrap();

    assert!(args.share);
}

#[test]
fn given_explicit_boolean_values_when_parsing_then_honours_them() {
    let args =
        CliArgs::try_parse_from(["voicebridge", "--share", "true", "--fp16", "false"]).unwrap();

    assert!(args.share);
    assert!(!args.fp16);
    assert_eq!(args.precision(), Precision::Full);
}

#[test]
fn given_local_pair_when_building_bootstrap_options_then_carries_paths_and_device() {
    let args = CliArgs::try_parse_from([
        "voicebridge",
        "--checkpoint",
        "/models/vc.pth",
        "--config",
        "/models/vc.yml",
    ])
    .unwrap();

    let options = args.bootstrap_options(ComputeDevice::Cuda(0));

    assert_eq!(options.checkpoint, Some(PathBuf::from("/models/vc.pth")));
    assert_eq!(options.config, Some(PathBuf::from("/models/vc.yml")));
    assert_eq!(options.device, ComputeDevice::Cuda(0));
    assert_eq!(options.precision, Precision::Half);
}

#[test]
fn given_hub_overrides_when_building_remote_artifact_then_uses_them() {
    let args = CliArgs::try_parse_from([
        "voicebridge",
        "--hf-repo",
        "someone/other-vc",
        "--hf-checkpoint",
        "model.safetensors",
        "--hf-config",
        "config.yml",
    ])
    .unwrap();

    let artifact = args.remote_artifact();

    assert_eq!(artifact.repo_id, "someone/other-vc");
    assert_eq!(artifact.checkpoint_file, "model.safetensors");
    assert_eq!(artifact.config_file, "config.yml");
}

#[test]
fn given_not_implemented_placeholder_when_parsing_then_maps_to_domain_mode() {
    let args =
        CliArgs::try_parse_from(["voicebridge", "--placeholder", "not-implemented"]).unwrap();

    assert_eq!(
        PlaceholderMode::from(args.placeholder),
        PlaceholderMode::NotImplemented
    );
}

#[test]
fn given_unknown_flag_when_parsing_then_fails() {
    assert!(CliArgs::try_parse_from(["voicebridge", "--gpu"]).is_err());
}
