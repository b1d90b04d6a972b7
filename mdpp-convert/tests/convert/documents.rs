//! Whole-document renders.

use crate::common::{fixture, render, render_json};
use insta::assert_snapshot;
use mdpp_convert::{Converter, Document, NodeKind, RawNode};

#[test]
fn test_guide_kitchensink() {
    let out = render_json(&fixture("guide.json"));
    assert_eq!(out, fixture("guide.md"));
}

#[test]
fn test_guide_renders_identically_twice() {
    let doc = Document::from_json(&fixture("guide.json")).unwrap();
    let converter = Converter::default();
    assert_eq!(
        converter.convert(&doc).unwrap(),
        converter.convert(&doc).unwrap()
    );
}

#[test]
fn test_tree_survives_json_round_trip() {
    let json = fixture("guide.json");
    let raw: RawNode = serde_json::from_str(&json).unwrap();
    let again = serde_json::to_string(&raw).unwrap();
    assert_eq!(render_json(&again), render_json(&json));
}

#[test]
fn test_example_block_with_listing() {
    let out = render(
        RawNode::new(NodeKind::Document)
            .with_title("Recipes")
            .with_child(
                RawNode::new(NodeKind::Section)
                    .with_id("bread")
                    .with_title("Bread")
                    .with_level(1)
                    .with_child(
                        RawNode::new(NodeKind::Example)
                            .with_child(
                                RawNode::new(NodeKind::Paragraph).with_line("Knead the dough."),
                            )
                            .with_child(
                                RawNode::new(NodeKind::Listing)
                                    .with_attr("style", "listing")
                                    .with_lines(["== Timing", "", "ten minutes", "by hand"]),
                            ),
                    )
                    .with_child(
                        RawNode::new(NodeKind::Literal).with_lines(["  flour 500g", "  water 300g"]),
                    ),
            ),
    );

    assert_snapshot!(out, @r"
    Recipes
    =======

    <!-- #bread -->
    # Bread

    > Knead the dough.
    >
    > > ## Timing
    > >
    > > ten minutes by hand

    ```
      flour 500g
      water 300g
    ```
    ");
}

#[test]
fn test_lists_with_attached_blocks() {
    let out = render(
        RawNode::new(NodeKind::Document).with_child(
            RawNode::new(NodeKind::Olist)
                .with_level(1)
                .with_child(
                    RawNode::new(NodeKind::ListItem)
                        .with_text("Install")
                        .with_child(
                            RawNode::new(NodeKind::Listing)
                                .with_attr("style", "source")
                                .with_attr("language", "sh")
                                .with_line("make install"),
                        ),
                )
                .with_child(
                    RawNode::new(NodeKind::ListItem)
                        .with_text("Verify")
                        .with_child(
                            RawNode::new(NodeKind::Ulist)
                                .with_level(2)
                                .with_child(RawNode::new(NodeKind::ListItem).with_text("version"))
                                .with_child(RawNode::new(NodeKind::ListItem).with_text("help")),
                        ),
                ),
        ),
    );

    assert_snapshot!(out, @r"
    1. Install
       ```sh
       make install
       ```
    2. Verify
      - version
      - help
    ");
}

#[test]
fn test_video_uses_configured_size() {
    let mut options = mdpp_convert::ConvertOptions::default();
    options.video_width = "1280".to_string();
    options.video_height = "720".to_string();
    let out = crate::common::render_with(
        RawNode::new(NodeKind::Document)
            .with_child(RawNode::new(NodeKind::Video).with_target("abc123")),
        &options,
    );
    assert!(out.contains("width=\"1280\" height=\"720\""));
    assert!(out.contains("src=\"https://www.youtube.com/embed/abc123\""));
}

#[test]
fn test_include_placeholder_paragraph() {
    let json = r#"{
      "kind": "document",
      "children": [
        {"kind": "paragraph", "lines": ["Intro."]},
        {"kind": "paragraph", "lines": ["<!--include:chapters/one.md-->"]}
      ]
    }"#;
    assert_eq!(render_json(json), "Intro.\n\n<!--include:chapters/one.md-->");
}
