/*!
## Rust Machine Module

This Rust module is the qu execution engine: values, the memory queue,
the label table and the dispatcher.

*/

pub type Address = usize;

mod link;
mod operation;
mod program;
mod queue;
mod runtime;
mod sequence;
mod val;

pub use link::Link;
pub use operation::Operation;
pub use program::Program;
pub use queue::Queue;
pub use runtime::Event;
pub use runtime::Runtime;
pub use sequence::{shuffle, sort_down, sort_up};
pub use val::Val;

#[cfg(test)]
mod tests;
