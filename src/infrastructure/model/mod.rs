mod candle_model_loader;
mod candle_voice_model;
mod device;
mod pth_checkpoint;
mod settings_file;

pub use candle_model_loader::CandleModelLoader;
pub use candle_voice_model::CandleVoiceModel;
pub use device::{candle_device, select_compute_device};
pub use pth_checkpoint::{STATE_DICT_KEY, read_pth_checkpoint};
pub use settings_file::{load_model_settings, parse_model_settings};
