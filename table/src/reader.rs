use std::path::Path;

use crate::LoadError;
use crate::Record;

/// Builds the record store from the table at `path`.
///
/// The first header column supplies every record's title; `text_column`
/// names the column shown in the content pane and must exist. When
/// `annotation_column` is empty, unset, or names a column the header does
/// not have, annotations start empty. Rows shorter than the header are
/// padded with empty fields rather than rejected.
pub fn load(
    path: &Path,
    text_column: &str,
    annotation_column: Option<&str>,
) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader.headers().map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let text_idx = headers
        .iter()
        .position(|header| header == text_column)
        .ok_or_else(|| LoadError::ColumnNotFound {
            name: text_column.to_string(),
        })?;
    let annotation_idx = annotation_column
        .filter(|name| !name.is_empty())
        .and_then(|name| headers.iter().position(|header| header == name));

    let mut records = Vec::new();
    for (position, row) in reader.records().enumerate() {
        let row = row.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        records.push(Record {
            position,
            title: field(0),
            source_text: field(text_idx),
            annotation: annotation_idx.map(field).unwrap_or_default(),
        });
    }

    tracing::debug!(rows = records.len(), "loaded input table");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn assigns_positions_in_input_order() {
        let file = write_input("title,text\nA,hello\nB,world\nC,again\n");
        let records = load(file.path(), "text", None).unwrap();

        let positions: Vec<usize> = records.iter().map(|record| record.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(records[0].title, "A");
        assert_eq!(records[0].source_text, "hello");
        assert_eq!(records[2].title, "C");
    }

    #[test]
    fn annotations_start_empty_without_a_column() {
        let file = write_input("title,text\nA,hello\n");
        let records = load(file.path(), "text", None).unwrap();
        assert_eq!(records[0].annotation, "");
    }

    #[test]
    fn reads_existing_annotations_by_column_name() {
        let file = write_input("title,text,notes\nA,hello,seen\nB,world,\n");
        let records = load(file.path(), "text", Some("notes")).unwrap();
        assert_eq!(records[0].annotation, "seen");
        assert_eq!(records[1].annotation, "");
    }

    #[test]
    fn unknown_annotation_column_starts_empty() {
        let file = write_input("title,text\nA,hello\n");
        let records = load(file.path(), "text", Some("missing")).unwrap();
        assert_eq!(records[0].annotation, "");
    }

    #[test]
    fn only_named_columns_are_consumed() {
        let file = write_input("title,extra,text,more\nA,x,hello,y\n");
        let records = load(file.path(), "text", None).unwrap();
        assert_eq!(records[0].title, "A");
        assert_eq!(records[0].source_text, "hello");
    }

    #[test]
    fn short_rows_are_padded() {
        let file = write_input("title,text,notes\nA\n");
        let records = load(file.path(), "text", Some("notes")).unwrap();
        assert_eq!(records[0].title, "A");
        assert_eq!(records[0].source_text, "");
        assert_eq!(records[0].annotation, "");
    }

    #[test]
    fn missing_text_column_is_rejected() {
        let file = write_input("title,body\nA,hello\n");
        let err = load(file.path(), "text", None).unwrap_err();
        assert!(matches!(err, LoadError::ColumnNotFound { name } if name == "text"));
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = load(Path::new("/nonexistent/input.csv"), "text", None).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn empty_input_yields_empty_store() {
        let file = write_input("title,text\n");
        let records = load(file.path(), "text", None).unwrap();
        assert!(records.is_empty());
    }
}
