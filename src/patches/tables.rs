//! Docutils tables restyled with Bootstrap's base table classes.

use crate::dom::{select_all, NodeExt};
use crate::error::PatchResult;
use crate::patches::{Applied, Patch};
use kuchikikiki::NodeRef;

/// Classes Sphinx puts on every generated table.
pub const SPHINX_TABLE_CLASSES: [&str; 2] = ["docutils", "align-default"];
/// Classes Bootstrap expects instead.
pub const BOOTSTRAP_TABLE_CLASSES: [&str; 2] = ["table", "table-hover"];
/// Class shading the header row.
pub const THEAD_CLASS: &str = "thead-light";

/// Swaps `table.docutils` for `table.table.table-hover` and shades its header.
pub struct Tables;

impl Patch for Tables {
    fn name(&self) -> &'static str {
        "tables"
    }

    fn apply(&self, document: &NodeRef) -> PatchResult<Applied> {
        let tables = select_all(document, "table.docutils")?;
        for table in &tables {
            table.remove_classes(&SPHINX_TABLE_CLASSES);
            table.add_classes(&BOOTSTRAP_TABLE_CLASSES);
            for head in select_all(table, "thead")? {
                head.add_classes(&[THEAD_CLASS]);
            }
        }
        Ok(tables.len().into())
    }
}

#[cfg(test)]
#[path = "../tests/tables.rs"]
mod tests;
