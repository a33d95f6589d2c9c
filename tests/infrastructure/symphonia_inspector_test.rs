use bytes::Bytes;

use voicebridge::application::ports::{AudioInspector, ConversionError};
use voicebridge::infrastructure::audio::{SymphoniaAudioInspector, probe_audio};

use crate::helpers::build_wav;

#[test]
fn given_mono_wav_when_probing_then_reports_rate_channels_and_frames() {
    let wav = build_wav(16_000, &vec![0i16; 1600]);

    let metadata = probe_audio(Bytes::from(wav)).unwrap();

    assert_eq!(metadata.sample_rate, 16_000);
    assert_eq!(metadata.channels, 1);
    assert_eq!(metadata.frames, 1600);
    assert!((metadata.duration_secs() - 0.1).abs() < 1e-9);
}

#[test]
fn given_empty_bytes_when_probing_then_returns_invalid_input() {
    let result = probe_audio(Bytes::new());

    assert!(matches!(result, Err(ConversionError::InvalidInput(_))));
}

#[test]
fn given_text_bytes_when_probing_then_returns_invalid_input() {
    let result = probe_audio(Bytes::from_static(b"this is plainly not an audio container"));

    assert!(matches!(result, Err(ConversionError::InvalidInput(_))));
}

#[tokio::test]
async fn given_wav_when_inspecting_asynchronously_then_matches_direct_probe() {
    let wav = build_wav(44_100, &vec![0i16; 4410]);

    let metadata = SymphoniaAudioInspector.inspect(Bytes::from(wav)).await.unwrap();

    assert_eq!(metadata.sample_rate, 44_100);
    assert_eq!(metadata.frames, 4410);
}
