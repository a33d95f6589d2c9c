pub mod audio;
pub mod model;
pub mod observability;
