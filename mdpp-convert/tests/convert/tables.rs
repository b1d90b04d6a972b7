//! Tables backed by source text on disk.

use crate::common::{fixture, fixture_path, render, render_with};
use mdpp_convert::{ConvertOptions, NodeKind, RawNode, TableData, TableSource};
use std::io::Write;
use std::path::PathBuf;

fn cells(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

/// The cell texts the parser reports for fixtures/options-table.adoc.
fn options_table(path: PathBuf) -> RawNode {
    RawNode::new(NodeKind::Table)
        .with_attr("role", "options")
        .with_table(TableData {
            header: Some(cells(&["Option", "Description"])),
            rows: vec![
                cells(&["--verbose", "mdpp -v tree.json"]),
                cells(&["--quiet", "Suppress all output."]),
                cells(&["--strict", "WARNING: Fails on unknown node kinds."]),
            ],
            columns: Some(2),
            source: Some(TableSource {
                path: Some(path),
                line: Some(3),
                lines: None,
            }),
        })
}

fn document(table: RawNode) -> RawNode {
    RawNode::new(NodeKind::Document).with_child(table)
}

#[test]
fn test_multiline_table_from_source_file() {
    let out = render(document(options_table(fixture_path("options-table.adoc"))));
    assert_eq!(out, fixture("options-table.md"));
}

#[test]
fn test_source_file_removed_before_render() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_path_buf();
    drop(file);

    let out = render(document(options_table(path)));
    assert!(out.starts_with("<!-- style:options -->\n| Option    | Description"));
    assert!(!out.contains("multiline"));
    assert!(out.contains("| --strict  | WARNING: Fails on unknown node kinds. |"));
}

#[test]
fn test_table_found_after_start_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "= Doc\n\n|===\n|a |b\n|===\n\nText.\n\n|===\n|Key |Value\n\n|x |first\nsecond\n|===\n"
    )
    .unwrap();

    let table = RawNode::new(NodeKind::Table).with_table(TableData {
        header: Some(cells(&["Key", "Value"])),
        rows: vec![cells(&["x", "first second"])],
        columns: Some(2),
        source: Some(TableSource {
            path: Some(file.path().to_path_buf()),
            line: Some(9),
            lines: None,
        }),
    });
    assert_eq!(
        render(document(table)),
        "<!-- multiline -->\n\
         | Key | Value   |\n\
         |-----|---------|\n\
         | x   | first   |\n\
         |     | second  |"
    );
}

#[test]
fn test_unterminated_table_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "|===\n|Key |Value\n|x |first\nsecond\n").unwrap();

    let table = RawNode::new(NodeKind::Table).with_table(TableData {
        header: Some(cells(&["Key", "Value"])),
        rows: vec![cells(&["x", "first second"])],
        columns: Some(2),
        source: Some(TableSource {
            path: Some(file.path().to_path_buf()),
            line: Some(1),
            lines: None,
        }),
    });
    assert_eq!(
        render(document(table)),
        "| Key | Value        |\n|-----|--------------|\n| x   | first second |"
    );
}

#[test]
fn test_multiline_disabled_by_option() {
    let options = ConvertOptions {
        multiline_tables: false,
        ..ConvertOptions::default()
    };
    let out = render_with(
        document(options_table(fixture_path("options-table.adoc"))),
        &options,
    );
    assert!(out.starts_with("<!-- style:options -->\n"));
    assert_eq!(out.lines().count(), 6);
}
