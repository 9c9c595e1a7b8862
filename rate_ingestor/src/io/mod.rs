pub mod json_file;
pub mod sink;

pub use json_file::JsonFileSink;
pub use sink::{RateSink, SinkError};
