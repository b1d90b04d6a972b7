//! Markdown++ must stay readable by plain CommonMark tooling: the style and id
//! comments become HTML blocks and everything else keeps its Markdown meaning.

use crate::common::{fixture, render_json};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};

fn parse<'a>(markdown: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let mut options = Options::default();
    options.extension.table = true;
    parse_document(arena, markdown, &options)
}

fn text_of<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let NodeValue::Text(t) = &descendant.data.borrow().value {
            text.push_str(t);
        }
    }
    text
}

#[test]
fn test_guide_structure_as_commonmark() {
    let markdown = render_json(&fixture("guide.json"));
    let arena = Arena::new();
    let root = parse(&markdown, &arena);

    let mut headings = Vec::new();
    let mut code_blocks = Vec::new();
    let mut tables = 0;
    let mut html_blocks = 0;
    let mut lists = 0;

    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Heading(h) => headings.push((h.level, text_of(node))),
            NodeValue::CodeBlock(block) => code_blocks.push(block.info.clone()),
            NodeValue::Table(_) => tables += 1,
            NodeValue::HtmlBlock(_) => html_blocks += 1,
            NodeValue::List(_) => lists += 1,
            _ => {}
        }
    }

    assert_eq!(
        headings,
        vec![
            (1, "User Guide".to_string()),
            (1, "Installing".to_string()),
            (1, "Configuring".to_string()),
            (2, "Files".to_string()),
        ]
    );
    assert_eq!(code_blocks, vec!["sh".to_string()]);
    assert_eq!(tables, 1);
    assert!(lists >= 2);
    assert!(html_blocks >= 3, "style and id comments should be HTML blocks");
}

#[test]
fn test_xref_becomes_link() {
    let markdown = render_json(&fixture("guide.json"));
    let arena = Arena::new();
    let root = parse(&markdown, &arena);

    let link = root
        .descendants()
        .find_map(|node| match &node.data.borrow().value {
            NodeValue::Link(link) => Some(link.url.clone()),
            _ => None,
        })
        .expect("xref should render as a link");
    assert_eq!(link, "files.md");
}

#[test]
fn test_admonition_is_a_block_quote() {
    let markdown = render_json(
        r#"{"kind": "document", "children": [
          {"kind": "admonition", "caption": "warning", "lines": ["Hot surface.", "Do not touch."]}
        ]}"#,
    );
    let arena = Arena::new();
    let root = parse(&markdown, &arena);

    let quote = root
        .descendants()
        .find(|node| matches!(node.data.borrow().value, NodeValue::BlockQuote))
        .expect("admonition body should be a block quote");
    assert!(text_of(quote).contains("Hot surface."));
}
