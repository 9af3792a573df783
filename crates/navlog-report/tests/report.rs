use std::fs;

use navlog_ingest::TableFormat;
use navlog_map::resolve_table;
use navlog_model::{CellValue, Row, Table};
use navlog_report::{
    FileReport, FileStatus, RUN_REPORT_FILE_NAME, encode_table, sha256_hex, write_run_report,
    write_table,
};
use navlog_standards::load_builtin_alias_table;
use tempfile::TempDir;

fn sample_table() -> Table {
    let mut table = Table::new(vec!["Row Name".to_string(), "Depth".to_string()]);
    table
        .push_row(Row::new(vec![
            CellValue::Text("0".to_string()),
            CellValue::Text("-5.0".to_string()),
        ]))
        .expect("row");
    table
        .push_row(Row::new(vec![
            CellValue::Text("1".to_string()),
            CellValue::Missing,
        ]))
        .expect("row");
    table
}

#[test]
fn encodes_with_input_delimiter() {
    let table = sample_table();
    let csv = encode_table(&table, TableFormat::Csv).expect("encode");
    insta::assert_snapshot!(String::from_utf8(csv).expect("utf8"), @r"
    Row Name,Depth
    0,-5.0
    1,
    ");

    let tsv = encode_table(&table, TableFormat::Tsv).expect("encode");
    assert_eq!(
        String::from_utf8(tsv).expect("utf8"),
        "Row Name\tDepth\n0\t-5.0\n1\t\n"
    );
}

#[test]
fn quotes_fields_containing_delimiter() {
    let mut table = Table::new(vec!["Notes".to_string()]);
    table
        .push_row(Row::new(vec![CellValue::Text("a,b".to_string())]))
        .expect("row");
    let csv = encode_table(&table, TableFormat::Csv).expect("encode");
    assert_eq!(String::from_utf8(csv).expect("utf8"), "Notes\n\"a,b\"\n");
}

#[test]
fn write_table_reports_digest_of_written_bytes() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("dive_processed.csv");
    let written = write_table(&path, &sample_table(), TableFormat::Csv).expect("write");

    let bytes = fs::read(&path).expect("read back");
    assert_eq!(written.sha256, sha256_hex(&bytes));
    assert_eq!(written.rows, 2);
    assert_eq!(written.path, path);
}

#[test]
fn run_report_lists_files_and_failures() {
    let dir = TempDir::new().expect("temp dir");
    let aliases = load_builtin_alias_table().expect("aliases");
    let plan = resolve_table(&aliases, &["time", "paro_depth_m"]);

    let mut ok = FileReport::new("input/a.csv", TableFormat::Csv).with_plan(&plan);
    ok.status = FileStatus::Written;
    ok.rows_in = Some(3);
    ok.rows_out = Some(3);

    let mut failed = FileReport::new("input/b.tsv", TableFormat::Tsv);
    failed.errors.push("file is empty: input/b.tsv".to_string());

    let path = write_run_report(
        &dir.path().join("out"),
        aliases.version(),
        &[ok, failed],
    )
    .expect("report");
    assert!(path.ends_with(RUN_REPORT_FILE_NAME));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(json["schema"], "navlog.run-report");
    assert_eq!(json["alias_table_version"], aliases.version());
    assert_eq!(json["file_count"], 2);
    assert_eq!(json["failed_count"], 1);

    let first = &json["files"][0];
    assert_eq!(first["status"], "written");
    assert_eq!(first["format"], "csv");
    let timestamp = first["resolutions"]
        .as_array()
        .expect("resolutions")
        .iter()
        .find(|entry| entry["column"] == "Timestamp")
        .expect("timestamp entry");
    assert_eq!(timestamp["resolution"]["status"], "resolved");
    assert_eq!(timestamp["resolution"]["header"], "time");

    let second = &json["files"][1];
    assert_eq!(second["status"], "failed");
    assert_eq!(second["errors"][0], "file is empty: input/b.tsv");
}
