mod convert;
mod health;
mod interface;
mod status;

pub use convert::{AudioPayload, ConvertResponse, convert_handler};
pub use health::health_handler;
pub use interface::{interface_page_handler, interface_schema_handler};
pub use status::status_handler;
