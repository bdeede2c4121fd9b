//! Domain layer: notation parsing, tree building and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod notation;
pub mod render;

pub use arena::Tree;
pub use builder::TreeBuilder;
pub use entities::*;
pub use error::{DomainError, TreeResult};
pub use notation::parse;
pub use render::{GlyphStyle, TreeRenderer};
