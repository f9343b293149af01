pub mod duration;
pub mod path;
pub mod time;

pub use duration::{format_minutes, parse_duration};
