// Adapters layer: concrete reporters that render demo events for a terminal or a pipe.

pub mod json;
pub mod text;

pub use json::JsonReporter;
pub use text::TextReporter;
