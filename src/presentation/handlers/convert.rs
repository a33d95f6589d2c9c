use axum::Json;
use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::application::ports::ConversionError;
use crate::domain::slider_range::{
    DIFFUSION_STEPS, INFERENCE_CFG_RATE, LENGTH_ADJUST, PITCH_SHIFT,
};
use crate::domain::{
    AudioClip, AudioMetadata, ConversionOutcome, ConversionParams, ConversionRequest, SliderRange,
    TargetVoice,
};
use crate::presentation::interface::fields;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
pub struct AudioPayload {
    pub filename: String,
    pub content_type: String,
    pub data_base64: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub status: String,
    pub audio: Option<AudioPayload>,
    pub kind: Option<&'static str>,
    pub source: Option<AudioMetadata>,
    pub params: Option<ConversionParams>,
}

impl From<ConversionOutcome> for ConvertResponse {
    fn from(outcome: ConversionOutcome) -> Self {
        Self {
            status: outcome.status,
            audio: outcome.audio.map(|clip| AudioPayload {
                data_base64: STANDARD.encode(&clip.data),
                filename: clip.filename,
                content_type: clip.content_type,
            }),
            kind: None,
            source: outcome.source_metadata,
            params: Some(outcome.params),
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn convert_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    if !state.context.is_loaded() {
        let reason = state
            .context
            .load_error()
            .unwrap_or("bootstrap did not complete")
            .to_string();
        return error_response(ConversionError::ModelNotLoaded(reason));
    }

    let multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            return error_response(ConversionError::InvalidInput(format!(
                "expected a multipart form: {}",
                e
            )));
        }
    };

    let request = match read_conversion_form(multipart).await {
        Ok(r) => r,
        Err(e) => return error_response(e),
    };

    match state.conversion_service.convert(request).await {
        Ok(outcome) => {
            tracing::info!(status = %outcome.status, "Conversion request completed");
            (StatusCode::OK, Json(ConvertResponse::from(outcome))).into_response()
        }
        Err(e) => error_response(e),
    }
}

fn error_response(error: ConversionError) -> Response {
    let status = match &error {
        ConversionError::ModelNotLoaded(_) => StatusCode::SERVICE_UNAVAILABLE,
        ConversionError::InputMissing(_) | ConversionError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        ConversionError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        ConversionError::ConfigNotFound(_)
        | ConversionError::ConfigInvalid(_)
        | ConversionError::ModelLoadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    tracing::warn!(kind = error.kind(), error = %error, "Conversion request rejected");

    (
        status,
        Json(ConvertResponse {
            status: error.to_string(),
            audio: None,
            kind: Some(error.kind()),
            source: None,
            params: None,
        }),
    )
        .into_response()
}

#[derive(Default)]
struct ConversionForm {
    source: Option<AudioClip>,
    target_audio: Option<AudioClip>,
    target_voice: Option<String>,
    diffusion_steps: Option<f64>,
    length_adjust: Option<f64>,
    inference_cfg_rate: Option<f64>,
    pitch_shift: Option<f64>,
}

impl ConversionForm {
    fn into_request(self) -> ConversionRequest {
        let target = match (self.target_audio, self.target_voice) {
            (Some(clip), _) => TargetVoice::Reference(clip),
            (None, Some(name)) if !name.trim().is_empty() => {
                TargetVoice::Named(name.trim().to_string())
            }
            _ => TargetVoice::Unspecified,
        };

        ConversionRequest {
            source: self.source,
            target,
            params: ConversionParams::from_sliders(
                self.diffusion_steps,
                self.length_adjust,
                self.inference_cfg_rate,
                self.pitch_shift,
            ),
        }
    }
}

async fn read_conversion_form(
    mut multipart: Multipart,
) -> Result<ConversionRequest, ConversionError> {
    let mut form = ConversionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ConversionError::InvalidInput(format!("multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            fields::SOURCE_AUDIO => form.source = read_audio(field).await?,
            fields::TARGET_AUDIO => form.target_audio = read_audio(field).await?,
            fields::TARGET_VOICE => form.target_voice = Some(read_text(field).await?),
            fields::DIFFUSION_STEPS => {
                form.diffusion_steps =
                    parse_slider(&name, &read_text(field).await?, DIFFUSION_STEPS)?
            }
            fields::LENGTH_ADJUST => {
                form.length_adjust = parse_slider(&name, &read_text(field).await?, LENGTH_ADJUST)?
            }
            fields::INFERENCE_CFG_RATE => {
                form.inference_cfg_rate =
                    parse_slider(&name, &read_text(field).await?, INFERENCE_CFG_RATE)?
            }
            fields::PITCH_SHIFT => {
                form.pitch_shift = parse_slider(&name, &read_text(field).await?, PITCH_SHIFT)?
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form.into_request())
}

/// Browsers submit an empty part for an untouched file input, so empty means absent.
async fn read_audio(field: Field<'_>) -> Result<Option<AudioClip>, ConversionError> {
    let name = field.name().unwrap_or_default().to_string();
    let filename = field.file_name().unwrap_or("upload").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| ConversionError::InvalidInput(format!("{}: {}", name, e)))?;

    if data.is_empty() {
        return Ok(None);
    }

    tracing::debug!(
        field = %name,
        filename = %filename,
        bytes = data.len(),
        "Audio upload received"
    );

    Ok(Some(AudioClip::new(filename, content_type, data)))
}

async fn read_text(field: Field<'_>) -> Result<String, ConversionError> {
    let name = field.name().unwrap_or_default().to_string();
    field
        .text()
        .await
        .map_err(|e| ConversionError::InvalidInput(format!("{}: {}", name, e)))
}

fn parse_slider(
    name: &str,
    raw: &str,
    range: SliderRange,
) -> Result<Option<f64>, ConversionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ConversionError::InvalidInput(format!("{} must be a number, got '{}'", name, raw))
        })?;

    if range.is_integral() && value.fract() != 0.0 {
        return Err(ConversionError::InvalidInput(format!(
            "{} must be a whole number, got '{}'",
            name, raw
        )));
    }

    if !range.contains(value) {
        tracing::debug!(
            field = name,
            value,
            min = range.min,
            max = range.max,
            "Clamping slider value into its declared range"
        );
    }

    Ok(Some(value))
}
