//! The reference conversions every release must keep producing.

use crate::common::render_json;

#[test]
fn nested_unordered_list_at_top_level() {
    // * a
    // ** b
    // * c
    let json = r#"{
      "kind": "document",
      "children": [
        {"kind": "ulist", "level": 1, "children": [
          {"kind": "list_item", "text": "a", "children": [
            {"kind": "ulist", "level": 2, "children": [
              {"kind": "list_item", "text": "b"}
            ]}
          ]},
          {"kind": "list_item", "text": "c"}
        ]}
      ]
    }"#;
    assert_eq!(render_json(json), "- a\n  - b\n- c");
}

#[test]
fn inline_image_macro_with_percent_dimensions() {
    let json = r#"{
      "kind": "document",
      "children": [
        {"kind": "section", "id": "_s", "title": "S", "level": 1, "children": []},
        {"kind": "paragraph", "lines": ["Look: image:cat.png[A cat,50%,30%]"]}
      ]
    }"#;
    assert!(render_json(json)
        .ends_with("Look: <!-- style:w50percent h30percent -->![A cat](cat.png)"));
}

#[test]
fn two_column_table_with_code_cell() {
    let json = r#"{
      "kind": "document",
      "children": [
        {"kind": "table", "table": {
          "header": ["Command", "Example"],
          "rows": [["build", "[source] ---- cargo build ----"]],
          "columns": 2,
          "source": {"line": 1, "lines": [
            "|===",
            "|Command |Example",
            "",
            "|build a|",
            "[source,sh]",
            "----",
            "cargo build",
            "----",
            "|==="
          ]}
        }}
      ]
    }"#;
    assert_eq!(
        render_json(json),
        "<!-- multiline -->\n\
         | Command | Example      |\n\
         |---------|--------------|\n\
         | build   | ```          |\n\
         |         | cargo build  |\n\
         |         | ```          |"
    );
}

#[test]
fn untitled_document_promotes_first_section() {
    let json = r#"{
      "kind": "document",
      "children": [
        {"kind": "section", "id": "_intro", "title": "Intro", "level": 1, "children": [
          {"kind": "paragraph", "lines": ["First words."]}
        ]}
      ]
    }"#;
    let out = render_json(json);
    assert_eq!(out, "Intro\n=====\n\nFirst words.");
    assert!(!out.contains("# Intro"));
}

#[test]
fn short_form_tip_keeps_trailing_newline() {
    let json = r#"{
      "kind": "document",
      "children": [
        {"kind": "admonition", "caption": "TIP", "lines": ["Use caching."]}
      ]
    }"#;
    assert_eq!(render_json(json), "<!-- style:AdmonitionTip -->\n> Use caching.\n");
}
