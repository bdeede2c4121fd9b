//! treenote: parse `parent > child, child; ...` notation into a validated tree
//! and draw it as an indented ASCII diagram.
//!
//! ```text
//! A > B > C, D; A > E
//!
//! A
//! ├── B
//! │   ├── C
//! │   └── D
//! └── E
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::services::TreeService;
pub use domain::{DomainError, GlyphStyle, Tree, TreeBuilder, TreeRenderer};

/// Parses `text` and builds the validated node map.
pub fn build_tree(text: &str) -> domain::TreeResult<Tree> {
    TreeBuilder::new().build(&domain::parse(text))
}

/// Draws `tree` with the default glyphs.
pub fn display_tree(tree: &Tree) -> domain::TreeResult<String> {
    TreeRenderer::default().render(tree)
}
