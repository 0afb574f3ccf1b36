//! Terminal presentation: board rendering and interactive prompts.

pub mod prompt;
pub mod render;

pub use prompt::{MoveRequest, Placement, Prompter};
pub use render::{render, PIN_SYMBOL};
