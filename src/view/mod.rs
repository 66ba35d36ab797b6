//! Element tree and the counter's components.

mod components;
mod node;

pub use components::{button, minus_button, plus_button, App, MINUS_LABEL, PLUS_LABEL};
pub use node::{Element, Handler, Node};
