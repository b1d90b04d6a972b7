//! Small text builders shared by the renderers.

/// Join rendered blocks with a blank line, dropping blocks that rendered to nothing.
pub(crate) fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prefix every line with `depth` quote markers. Blank lines keep a bare marker.
pub(crate) fn block_quote(text: &str, depth: usize) -> String {
    let prefix = "> ".repeat(depth);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line with `> `, blank lines included.
pub(crate) fn quote_lines(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fenced code block, labeled when `language` is given.
pub(crate) fn fenced<S: AsRef<str>>(language: Option<&str>, lines: &[S]) -> String {
    let mut out = format!("```{}\n", language.unwrap_or_default());
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out.push_str("```");
    out
}

/// `<!-- style:... -->` comment.
pub(crate) fn style_comment(tags: &str) -> String {
    format!("<!-- style:{tags} -->")
}

/// `NOTE` / `note` → `Note`.
pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Indent every line after the first by `width` spaces.
pub(crate) fn hang(text: &str, width: usize) -> String {
    text.replace('\n', &format!("\n{}", " ".repeat(width)))
}

/// Indent every non-empty line by `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width of `text` in characters, as used for column alignment.
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Left-justify `text` to `width` characters.
pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text_width(text));
    format!("{text}{}", " ".repeat(fill))
}
