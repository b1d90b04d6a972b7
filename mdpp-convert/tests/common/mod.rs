//! Fixture loading shared by the conversion tests.

use mdpp_convert::{convert, convert_json, ConvertOptions, Document, RawNode};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name} should exist: {e}"))
}

/// Render a JSON tree with default options.
pub fn render_json(json: &str) -> String {
    convert_json(json, &ConvertOptions::default()).expect("tree to convert")
}

/// Render a tree built in Rust with default options.
pub fn render(root: RawNode) -> String {
    render_with(root, &ConvertOptions::default())
}

pub fn render_with(root: RawNode, options: &ConvertOptions) -> String {
    convert(&Document::from_raw(root), options).expect("tree to convert")
}
