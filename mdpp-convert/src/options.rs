use serde::{Deserialize, Serialize};

/// Knobs for the Markdown++ converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Prefix marking auto-generated ids; a document `idprefix` attribute wins
    pub idprefix: String,

    /// Suffix include targets are rewritten to
    pub outfilesuffix: String,

    /// Whether two-column tables may be rebuilt from their source text
    pub multiline_tables: bool,

    /// Player width used when a video node carries none
    pub video_width: String,

    /// Player height used when a video node carries none
    pub video_height: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            idprefix: "_".to_string(),
            outfilesuffix: ".md".to_string(),
            multiline_tables: true,
            video_width: "640".to_string(),
            video_height: "360".to_string(),
        }
    }
}
