use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AudioMetadata;

use super::ConversionError;

#[async_trait]
pub trait AudioInspector: Send + Sync {
    /// Takes the upload by handle; cloning `Bytes` shares the buffer.
    async fn inspect(&self, data: Bytes) -> Result<AudioMetadata, ConversionError>;
}
