//! Tree service
//!
//! Runs the parse → build → render pipeline with the configured glyphs.

use tracing::{debug, info, instrument};

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{parse, Tree, TreeBuilder, TreeRenderer};

/// Service exposing the two core entry points plus their derived views.
#[derive(Debug, Clone, Default)]
pub struct TreeService {
    settings: Settings,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse `text` and build the validated node map.
    #[instrument(level = "debug", skip(self))]
    pub fn build_tree(&self, text: &str) -> ApplicationResult<Tree> {
        let associations = parse(text);
        let tree = TreeBuilder::new().build(&associations)?;
        info!("built tree: {} nodes", tree.len());
        Ok(tree)
    }

    /// Draw `tree` as a diagram.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn display_tree(&self, tree: &Tree) -> ApplicationResult<String> {
        let diagram = TreeRenderer::new(self.settings.glyphs).render(tree)?;
        Ok(diagram)
    }

    /// Build and write the `#`-depth outline.
    #[instrument(level = "debug", skip(self))]
    pub fn outline(&self, text: &str) -> ApplicationResult<String> {
        let tree = self.build_tree(text)?;
        let outline = TreeRenderer::new(self.settings.glyphs).outline(&tree)?;
        Ok(outline)
    }

    /// Build and list every node as `id: child, child` in creation order.
    #[instrument(level = "debug", skip(self))]
    pub fn nodes(&self, text: &str) -> ApplicationResult<Vec<String>> {
        let tree = self.build_tree(text)?;
        Ok(tree.nodes().map(ToString::to_string).collect())
    }

    /// Diagram for `text`, or the error message as display text.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, text: &str) -> String {
        match self
            .build_tree(text)
            .and_then(|tree| self.display_tree(&tree))
        {
            Ok(diagram) => diagram,
            Err(e) => {
                debug!("render failed: {}", e);
                e.to_string()
            }
        }
    }
}
