//! Various configuration options to control wavinfo

mod parse_options;

pub use parse_options::{MimeStyle, ParseOptions};
