//! Parser for the `parent > child, child; ...` notation.
//!
//! ```text
//! input      ::= context (';' context)*
//! context    ::= level ('>' level)*
//! level      ::= identifier (',' identifier)*
//! identifier ::= any run of characters other than '>' ',' ';', trimmed
//! ```
//!
//! There is no syntax error class: stray delimiters just produce empty labels.

use tracing::{debug, instrument};

use crate::domain::entities::Association;

pub const CONTEXT_SEPARATOR: char = ';';
pub const LEVEL_SEPARATOR: char = '>';
pub const CHILD_SEPARATOR: char = ',';

/// Splits raw notation into associations, one per adjacent pair of levels.
///
/// A level acting as parent is taken literally, commas included, so in
/// `A > B, C > D` the middle level yields children `B` and `C` of `A` and
/// also the single parent `"B, C"` of `D`.
#[instrument(level = "debug")]
pub fn parse(input: &str) -> Vec<Association> {
    let associations: Vec<Association> = input
        .split(CONTEXT_SEPARATOR)
        .flat_map(parse_context)
        .collect();
    debug!("parsed {} associations", associations.len());
    associations
}

fn parse_context(context: &str) -> Vec<Association> {
    let chain: Vec<&str> = context.split(LEVEL_SEPARATOR).map(str::trim).collect();
    chain
        .windows(2)
        .map(|pair| Association::new(pair[0], split_children(pair[1])))
        .collect()
}

fn split_children(level: &str) -> Vec<String> {
    level
        .split(CHILD_SEPARATOR)
        .map(|s| s.trim().to_string())
        .collect()
}
