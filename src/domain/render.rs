//! Tree renderer: root selection, linearization and ASCII drawing.

use std::borrow::Cow;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use termtree::{GlyphPalette, Tree as TermTree};
use tracing::{debug, instrument, warn};

use crate::domain::arena::Tree;
use crate::domain::entities::{DisplayLine, Node};
use crate::domain::error::{DomainError, TreeResult};

/// Connector glyph set used when drawing the diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    /// `├── `, `└── `, `│   `
    #[default]
    Box,
    /// `|-- `, `` `-- ``, `|   `
    Ascii,
    /// `├── `, `╰── `, `│   `
    Rounded,
}

impl GlyphStyle {
    fn palette(self) -> GlyphPalette {
        let mut glyphs = GlyphPalette::new();
        match self {
            GlyphStyle::Box => {}
            GlyphStyle::Ascii => {
                glyphs.middle_item = "|";
                glyphs.last_item = "`";
                glyphs.item_indent = "-- ";
                glyphs.middle_skip = "|";
            }
            GlyphStyle::Rounded => {
                glyphs.last_item = "╰";
            }
        }
        glyphs
    }
}

/// Renders a validated [`Tree`] from its first unreferenced node.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer {
    style: GlyphStyle,
}

impl TreeRenderer {
    pub fn new(style: GlyphStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> GlyphStyle {
        self.style
    }

    /// Draws the diagram for `tree`.
    #[instrument(level = "debug", skip(tree), fields(nodes = tree.len()))]
    pub fn render(&self, tree: &Tree) -> TreeResult<String> {
        let root = find_root(tree)?;
        let lines = linearize(tree, &root.id)?;
        Ok(draw(&lines, self.style))
    }

    /// Writes the `#`-per-depth outline for `tree`.
    #[instrument(level = "debug", skip(tree), fields(nodes = tree.len()))]
    pub fn outline(&self, tree: &Tree) -> TreeResult<String> {
        let root = find_root(tree)?;
        let lines = linearize(tree, &root.id)?;
        Ok(outline(&lines))
    }
}

/// First node in creation order that is nobody's child.
///
/// Further candidates are not rendered; they are only logged.
pub fn find_root(tree: &Tree) -> TreeResult<&Node> {
    let mut roots = tree.roots().into_iter();
    let root = roots.next().ok_or(DomainError::NoRoot)?;
    let omitted: Vec<&str> = roots.map(|n| n.id.as_str()).collect();
    if !omitted.is_empty() {
        warn!(root = %root.id, ?omitted, "multiple roots, rendering the first only");
    }
    Ok(root)
}

/// Depth-first pre-order walk from `root`, root at depth 1.
///
/// Uses an explicit stack. Nodes reached twice through different parents are
/// emitted each time; reaching one of the current node's own ancestors fails
/// with [`DomainError::CycleDetected`].
#[instrument(level = "debug", skip(tree))]
pub fn linearize<'a>(tree: &'a Tree, root: &'a str) -> TreeResult<Vec<DisplayLine>> {
    let mut lines = Vec::new();
    let mut path: Vec<&str> = Vec::new();
    let mut stack: Vec<(&str, usize)> = vec![(root, 1)];

    while let Some((id, depth)) = stack.pop() {
        // ancestors of a pre-order node are the last depth-1 entries visited
        path.truncate(depth - 1);
        if path.contains(&id) {
            return Err(DomainError::CycleDetected(id.to_string()));
        }
        lines.push(DisplayLine::new(depth, id));
        path.push(id);

        // reverse for left-to-right order
        for child in tree.children_of(id).iter().rev() {
            stack.push((child.as_str(), depth + 1));
        }
    }

    debug!("linearized {} lines", lines.len());
    Ok(lines)
}

/// Folds a single-rooted pre-order outline into a diagram.
///
/// Returns an empty string for no lines.
pub fn draw(lines: &[DisplayLine], style: GlyphStyle) -> String {
    let mut stack: Vec<TermTree<String>> = Vec::new();

    for line in lines {
        while stack.len() >= line.depth.max(2) {
            attach_top(&mut stack);
        }
        let label = single_line(&line.label).into_owned();
        stack.push(TermTree::new(label).with_glyphs(style.palette()));
    }
    while stack.len() > 1 {
        attach_top(&mut stack);
    }

    stack.pop().map(|root| root.to_string()).unwrap_or_default()
}

fn attach_top(stack: &mut Vec<TermTree<String>>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.push(done);
        }
    }
}

/// One `#` per depth level followed by the label, one line each.
pub fn outline(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{}{}\n", "#".repeat(line.depth), single_line(&line.label)))
        .collect()
}

/// Escapes control characters so a label never spans several rows.
fn single_line(label: &str) -> Cow<'_, str> {
    if !label.contains(char::is_control) {
        return Cow::Borrowed(label);
    }
    Cow::Owned(
        label
            .chars()
            .map(|c| {
                if c.is_control() {
                    c.escape_default().to_string()
                } else {
                    c.to_string()
                }
            })
            .collect(),
    )
}
