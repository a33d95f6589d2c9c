pub mod config;
pub mod handlers;
pub mod interface;
pub mod router;
pub mod state;

pub use config::{CliArgs, PlaceholderArg, ServerSettings};
pub use interface::Interface;
pub use router::create_router;
pub use state::AppState;
