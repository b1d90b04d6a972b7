//! Property checks over generated trees.

use crate::common::{render, render_with};
use mdpp_convert::{ConvertOptions, NodeKind, RawNode, TableData, TableSource};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn titled(children: Vec<RawNode>) -> RawNode {
    RawNode::new(NodeKind::Document)
        .with_title("Doc")
        .with_children(children)
}

/// A chain of unordered lists, each nested in the only item of the one above.
fn nested_list(depth: usize, words: &[String]) -> RawNode {
    let mut list: Option<RawNode> = None;
    for level in (1..=depth).rev() {
        let mut item = RawNode::new(NodeKind::ListItem).with_text(words[level - 1].clone());
        if let Some(inner) = list.take() {
            item = item.with_child(inner);
        }
        list = Some(
            RawNode::new(NodeKind::Ulist)
                .with_level(level)
                .with_child(item),
        );
    }
    list.unwrap_or_else(|| RawNode::new(NodeKind::Ulist))
}

/// Table cells read back from rendered pipe rows, ignoring style comments,
/// dash rules and all-blank spacer rows.
fn cell_rows(markdown: &str) -> Vec<Vec<String>> {
    markdown
        .lines()
        .filter(|line| line.starts_with('|'))
        .map(|line| {
            let inner = line.trim_start_matches('|').trim_end_matches('|');
            inner
                .split('|')
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|cells| {
            !cells
                .iter()
                .all(|cell| cell.is_empty() || cell.chars().all(|c| c == '-'))
        })
        .collect()
}

/// Widths of the dash runs in the rule under the header row.
fn rule_widths(markdown: &str) -> Vec<usize> {
    markdown
        .lines()
        .find(|line| line.starts_with("|-"))
        .map(|rule| {
            rule.trim_matches('|')
                .split('|')
                .map(str::len)
                .collect()
        })
        .unwrap_or_default()
}

/// Source cells are written `|a |b`, or `|a|b` without `spaced`.
fn two_column_table(header: &[String], rows: &[(String, String)], spaced: bool) -> RawNode {
    let bar = if spaced { " |" } else { "|" };
    let mut lines = vec![
        "|===".to_string(),
        format!("|{}{bar}{}", header[0], header[1]),
        String::new(),
    ];
    for (left, right) in rows {
        lines.push(format!("|{left}{bar}{right}"));
    }
    lines.push("|===".to_string());

    RawNode::new(NodeKind::Table).with_table(TableData {
        header: Some(header.to_vec()),
        rows: rows
            .iter()
            .map(|(left, right)| vec![left.clone(), right.clone()])
            .collect(),
        columns: Some(2),
        source: Some(TableSource {
            path: None,
            line: Some(1),
            lines: Some(lines),
        }),
    })
}

proptest! {
    #[test]
    fn rendering_is_deterministic(
        paragraphs in prop::collection::vec(word(), 1..6),
        heading in word(),
    ) {
        let section = RawNode::new(NodeKind::Section)
            .with_level(1)
            .with_title(heading)
            .with_children(
                paragraphs
                    .iter()
                    .map(|p| RawNode::new(NodeKind::Paragraph).with_line(p.clone())),
            );
        let root = titled(vec![section]);
        prop_assert_eq!(render(root.clone()), render(root));
    }

    #[test]
    fn pixel_width_becomes_w_tag(width in 1u32..5000) {
        let image = RawNode::new(NodeKind::Image)
            .with_target("a.png")
            .with_attr("width", width.to_string());
        prop_assert_eq!(
            render(titled(vec![image])),
            format!("Doc\n===\n\n<!-- style:w{width} -->![](a.png)")
        );
    }

    #[test]
    fn percent_width_becomes_percent_tag(width in 1u32..=100) {
        let image = RawNode::new(NodeKind::Image)
            .with_target("a.png")
            .with_attr("width", format!("{width}%"));
        let output = render(titled(vec![image]));
        let expected = format!("<!-- style:w{width}percent -->![](a.png)");
        prop_assert!(output.ends_with(&expected), "{}", output);
    }

    #[test]
    fn image_without_size_has_no_comment(alt in word()) {
        let image = RawNode::new(NodeKind::Image)
            .with_target("a.png")
            .with_positional(1, alt.clone());
        prop_assert_eq!(
            render(titled(vec![image])),
            format!("Doc\n===\n\n![{alt}](a.png)")
        );
    }

    #[test]
    fn generated_ids_are_suppressed(slug in word(), title in word()) {
        let section = |id: String| {
            RawNode::new(NodeKind::Section)
                .with_level(1)
                .with_id(id)
                .with_title(title.clone())
        };

        let generated = render(titled(vec![section(format!("_{slug}"))]));
        prop_assert!(!generated.contains("<!-- #"), "{}", generated);

        let explicit = render(titled(vec![section(slug.clone())]));
        let expected = format!("<!-- #{slug} -->\n# {title}");
        prop_assert!(explicit.contains(&expected), "{}", explicit);
    }

    #[test]
    fn nested_lists_indent_two_spaces_per_level(
        words in prop::collection::vec(word(), 6),
        depth in 1usize..=6,
    ) {
        let output = render(titled(vec![nested_list(depth, &words)]));
        let deepest = format!("{}- {}", "  ".repeat(depth - 1), words[depth - 1]);
        prop_assert!(
            output.lines().any(|line| line == deepest),
            "missing {:?} in\n{}",
            deepest,
            output
        );
    }

    #[test]
    fn simple_tables_survive_the_source_layout(
        header in prop::collection::vec(word(), 2),
        rows in prop::collection::vec((word(), word()), 1..6),
        spaced in any::<bool>(),
    ) {
        let table = two_column_table(&header, &rows, spaced);
        let rebuilt = render(titled(vec![table.clone()]));
        let laid_out = render_with(
            titled(vec![table]),
            &ConvertOptions {
                multiline_tables: false,
                ..ConvertOptions::default()
            },
        );

        // Single-line rows carry no multiline tag; the source layout shows
        // itself through its one-wider second column.
        prop_assert!(!rebuilt.contains("multiline"), "{}", rebuilt);
        let rebuilt_rule = rule_widths(&rebuilt);
        let laid_out_rule = rule_widths(&laid_out);
        prop_assert_eq!(rebuilt_rule[0], laid_out_rule[0]);
        prop_assert_eq!(rebuilt_rule[1], laid_out_rule[1] + 1);
        prop_assert_eq!(cell_rows(&rebuilt), cell_rows(&laid_out));
    }
}
