//! Include directive placeholders.
//!
//! The converter does not inline included files. When the parser meets an
//! `include::chapter.adoc[]` directive it substitutes the line returned by
//! [`IncludeRewriter::placeholder`], `<!--include:chapter.md-->`, and the paragraph
//! renderer later emits that marker untouched so the publishing pipeline can
//! resolve it.

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

static INCLUDE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^include::([^\[\s]+)\[[^\]]*\]\s*$").expect("valid regex"));

static INCLUDE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<!--include:.*-->$").expect("valid regex"));

/// Whether `line` is an include placeholder produced by this module.
pub fn is_include_marker(line: &str) -> bool {
    INCLUDE_MARKER.is_match(line)
}

/// Placeholder line for `target`, with its extension swapped for `suffix`.
pub fn include_placeholder(target: &str, suffix: &str) -> String {
    format!("<!--include:{}-->", replace_extension(target, suffix))
}

fn replace_extension(target: &str, suffix: &str) -> String {
    let name_start = target.rfind('/').map_or(0, |i| i + 1);
    match target[name_start..].rfind('.') {
        // A leading dot marks a hidden file, not an extension
        Some(dot) if dot > 0 => format!("{}{suffix}", &target[..name_start + dot]),
        _ => format!("{target}{suffix}"),
    }
}

/// Rewrites include directives into placeholders for a fixed output suffix.
#[derive(Debug, Clone)]
pub struct IncludeRewriter {
    suffix: String,
}

impl IncludeRewriter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn from_options(options: &ConvertOptions) -> Self {
        Self::new(options.outfilesuffix.clone())
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The replacement line for an include of `target`.
    pub fn placeholder(&self, target: &str) -> String {
        include_placeholder(target, &self.suffix)
    }

    /// Replace every include directive line in `source`, keeping line endings.
    pub fn rewrite(&self, source: &str) -> String {
        let mut output = String::with_capacity(source.len());
        for line in source.split_inclusive('\n') {
            let body = line.trim_end_matches(['\n', '\r']);
            let ending = &line[body.len()..];
            match INCLUDE_DIRECTIVE.captures(body) {
                Some(caps) => {
                    let target = &caps[1];
                    debug!(target, "replacing include directive");
                    output.push_str(&self.placeholder(target));
                    output.push_str(ending);
                }
                None => output.push_str(line),
            }
        }
        output
    }

    /// Read `path` and rewrite its include directives.
    pub fn rewrite_file(&self, path: impl AsRef<Path>) -> Result<String, ConvertError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.rewrite(&source))
    }
}

impl Default for IncludeRewriter {
    fn default() -> Self {
        Self::from_options(&ConvertOptions::default())
    }
}

/// Rewrite include directives in `source` using the default `.md` suffix.
pub fn rewrite_includes(source: &str) -> String {
    IncludeRewriter::default().rewrite(source)
}
