pub mod json;
pub mod terminal;

pub use json::JsonRenderer;
pub use terminal::TerminalRenderer;
