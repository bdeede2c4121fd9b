//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (NotationReader) but are themselves
//! concrete structs, not traits.

mod input;
mod tree;

pub use input::{InputService, InputSource};
pub use tree::TreeService;
