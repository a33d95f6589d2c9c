mod candle_model_loader_test;
mod candle_voice_model_test;
mod settings_file_test;
mod symphonia_inspector_test;
