use std::io::Cursor;

use async_trait::async_trait;
use bytes::Bytes;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioInspector, ConversionError};
use crate::domain::AudioMetadata;

/// Probes uploads with symphonia and walks every packet to count frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioInspector;

#[async_trait]
impl AudioInspector for SymphoniaAudioInspector {
    async fn inspect(&self, data: Bytes) -> Result<AudioMetadata, ConversionError> {
        tokio::task::spawn_blocking(move || probe_audio(data))
            .await
            .map_err(|e| ConversionError::InvalidInput(format!("audio probe aborted: {}", e)))?
    }
}

pub fn probe_audio(data: Bytes) -> Result<AudioMetadata, ConversionError> {
    if data.is_empty() {
        return Err(ConversionError::InvalidInput("empty audio file".to_string()));
    }

    let cursor = Cursor::new(data);
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| ConversionError::InvalidInput(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| ConversionError::InvalidInput("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params
        .sample_rate
        .ok_or_else(|| ConversionError::InvalidInput("unknown sample rate".to_string()))?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| ConversionError::InvalidInput(format!("codec: {}", e)))?;

    let mut frames: u64 = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(ConversionError::InvalidInput(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => frames += decoded.frames() as u64,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
            }
            Err(e) => {
                return Err(ConversionError::InvalidInput(format!("decode: {}", e)));
            }
        }
    }

    if frames == 0 {
        return Err(ConversionError::InvalidInput(
            "no audio samples decoded".to_string(),
        ));
    }

    let metadata = AudioMetadata {
        sample_rate,
        channels,
        frames,
    };

    tracing::debug!(
        sample_rate,
        channels,
        frames,
        duration_secs = metadata.duration_secs(),
        "Audio probed"
    );

    Ok(metadata)
}
