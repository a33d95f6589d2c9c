mod cli;
mod server_settings;

pub use cli::{CliArgs, PlaceholderArg};
pub use server_settings::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT, ServerSettings};
