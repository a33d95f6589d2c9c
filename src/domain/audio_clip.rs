use bytes::Bytes;
use serde::Serialize;

/// An uploaded or produced audio file, kept as opaque bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl AudioClip {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Stream properties discovered by probing an [`AudioClip`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioMetadata {
    pub sample_rate: u32,
    pub channels: usize,
    pub frames: u64,
}

impl AudioMetadata {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f64 / self.sample_rate as f64
    }
}
