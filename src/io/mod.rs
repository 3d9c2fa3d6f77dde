//! Output side of the dashboard: the `Renderer` capability and its writers.

pub mod output;
pub mod writers;

pub use output::{create_renderer, OutputFormat, Renderer};
pub use writers::{JsonRenderer, TerminalRenderer};
