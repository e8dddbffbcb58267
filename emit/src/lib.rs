mod literal;
mod node;
mod render;

pub use literal::{chunks, escape_bytes, quote};
pub use node::{Arm, Node, Syntax, Unit};
