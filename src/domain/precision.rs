use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Half,
    Full,
}

impl Precision {
    pub fn from_fp16_flag(fp16: bool) -> Self {
        if fp16 { Self::Half } else { Self::Full }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Half => "fp16",
            Precision::Full => "fp32",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
