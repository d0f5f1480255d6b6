//! Flat-table side of the annotation tool: the record type plus the CSV
//! loader and writer. Everything here runs strictly before or after the
//! interactive session; nothing in this crate touches the terminal.

mod error;
mod reader;
mod writer;

pub use error::LoadError;
pub use error::SaveError;
pub use reader::load;
pub use writer::save;

/// Column name written for annotations when the user did not pick one.
pub const DEFAULT_ANNOTATION_COLUMN: &str = "annotation";

/// One annotatable row of the input table.
///
/// `position` is the 0-based index assigned at load time and is never
/// reassigned; `title` and `source_text` are immutable for the life of a
/// session. `annotation` is the only field the session mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub position: usize,
    pub title: String,
    pub source_text: String,
    pub annotation: String,
}
