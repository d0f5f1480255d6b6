use std::path::Path;

use crate::Record;
use crate::SaveError;

/// Writes the annotated store to `path`: a `title,text,<annotation>`
/// header row, then one row per record in store order. Fields containing
/// the delimiter, quote character, or a newline are quoted with embedded
/// quotes doubled (the `csv` crate's default).
pub fn save(path: &Path, records: &[Record], annotation_column: &str) -> Result<(), SaveError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    writer
        .write_record(["title", "text", annotation_column])
        .map_err(|source| SaveError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    for record in records {
        writer
            .write_record([&record.title, &record.source_text, &record.annotation])
            .map_err(|source| SaveError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }
    writer.flush().map_err(|source| SaveError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(rows = records.len(), "wrote annotated table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load;
    use pretty_assertions::assert_eq;

    fn record(position: usize, title: &str, text: &str, annotation: &str) -> Record {
        Record {
            position,
            title: title.to_string(),
            source_text: text.to_string(),
            annotation: annotation.to_string(),
        }
    }

    #[test]
    fn writes_header_and_rows_in_store_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            record(0, "A", "hello", "hi"),
            record(1, "B", "world", "bye"),
        ];

        save(&path, &records, "annotation").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "title,text,annotation\nA,hello,hi\nB,world,bye\n");
    }

    #[test]
    fn quotes_delimiters_quotes_and_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![record(0, "a,b", "say \"hi\"", "line1\nline2")];

        save(&path, &records, "annotation").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "title,text,annotation\n\"a,b\",\"say \"\"hi\"\"\",\"line1\nline2\"\n"
        );
    }

    #[test]
    fn honors_custom_annotation_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        save(&path, &[record(0, "A", "hello", "x")], "notes").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "title,text,notes\nA,hello,x\n");
    }

    #[test]
    fn empty_store_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        save(&path, &[], "annotation").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "title,text,annotation\n");
    }

    #[test]
    fn round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            record(0, "A", "multi\nline", "first"),
            record(1, "B", "plain", ""),
        ];

        save(&path, &records, "annotation").unwrap();
        let reloaded = load(&path, "text", Some("annotation")).unwrap();

        assert_eq!(reloaded, records);
    }

    #[test]
    fn unwritable_path_is_rejected() {
        let err = save(
            Path::new("/nonexistent/dir/out.csv"),
            &[],
            "annotation",
        )
        .unwrap_err();
        assert!(matches!(err, SaveError::Write { .. }));
    }
}
