//! CSV output sink.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::WriteConfig;
use crate::table::Table;

/// Append `.csv` when the name does not already end with it.
pub fn ensure_csv_extension(name: &str) -> String {
    if name.ends_with(".csv") {
        name.to_string()
    } else {
        format!("{name}.csv")
    }
}

/// Render one cell for CSV output.
///
/// Strings are written raw (the csv writer handles quoting), null becomes
/// an empty field, and nested structures serialize as compact JSON.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Serialize `table` to `path`: header row first, then one line per row,
/// no index column. Overwrites any existing file in place.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if table.num_columns() == 0 {
        // Nothing to serialize; the artifact is still created
        std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer
        .write_record(table.columns())
        .context("failed to write CSV header")?;
    for row in table.rows() {
        let record: Vec<String> = row.iter().map(render_cell).collect();
        writer
            .write_record(&record)
            .context("failed to write CSV row")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Fix up the configured filename and write the table.
///
/// Returns the final output path (always ending in `.csv`).
pub fn write_table(table: &Table, config: &WriteConfig) -> Result<PathBuf> {
    let path = PathBuf::from(ensure_csv_extension(&config.output_filename));
    write_csv(table, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tabulate;
    use serde_json::json;
    use tempfile::TempDir;

    fn table(payload: Value, key: &str) -> Table {
        tabulate(&payload, key).unwrap()
    }

    #[test]
    fn csv_extension_appended_once() {
        assert_eq!(ensure_csv_extension("a"), "a.csv");
        assert_eq!(ensure_csv_extension("a.csv"), "a.csv");
        assert_eq!(ensure_csv_extension("a.csv.bak"), "a.csv.bak.csv");
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let t = table(
            json!({"veiculos": [{"id": 1, "lat": 0.1}, {"id": 2, "lat": 0.2}]}),
            "veiculos",
        );

        write_csv(&t, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,lat\n1,0.1\n2,0.2\n");
    }

    #[test]
    fn quotes_commas_and_newlines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let t = table(
            json!({"k": [{"name": "a,b", "note": "line1\nline2", "q": "say \"hi\""}]}),
            "k",
        );

        write_csv(&t, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "name,note,q\n\"a,b\",\"line1\nline2\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn null_cells_are_empty_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let t = table(json!({"k": [{"a": 123}, {"b": 456}]}), "k");

        write_csv(&t, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a,b\n123,\n,456\n");
    }

    #[test]
    fn round_trip_preserves_cells() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let t = table(
            json!({"k": [{"id": 1, "name": "alpha", "score": 0.5}, {"id": 2, "name": "beta", "score": 1.5}]}),
            "k",
        );

        write_csv(&t, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, t.columns());

        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(records.len(), t.num_rows());
        assert_eq!(records[0], ["1", "alpha", "0.5"]);
        assert_eq!(records[1], ["2", "beta", "1.5"]);
    }

    #[test]
    fn overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        std::fs::write(&path, "stale content that is much longer than the new one\n").unwrap();

        let t = table(json!({"k": [{"a": 1}]}), "k");
        write_csv(&t, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a\n1\n");
    }

    #[test]
    fn write_table_appends_extension() {
        let temp_dir = TempDir::new().unwrap();
        let name = temp_dir.path().join("veiculos");
        let t = table(json!({"k": [{"a": 1}]}), "k");

        let config = WriteConfig {
            output_filename: name.to_string_lossy().into_owned(),
        };
        let path = write_table(&t, &config).unwrap();

        assert_eq!(path.extension().unwrap(), "csv");
        assert!(path.exists());
    }
}
