pub mod errors;

pub use errors::{ConfigError, InvalidArgument, InvalidReason};
