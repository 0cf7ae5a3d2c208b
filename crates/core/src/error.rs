use std::path::PathBuf;

/// A conversion error. Every variant is terminal for the single-shot
/// conversion; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input document could not be opened or read.
    #[error("unable to open file: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The converted output could not be written.
    #[error("unable to open file for writing: {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `.`-delimited section yielded no subject token.
    #[error("malformed section {section}: no subject")]
    EmptySection { section: usize },

    /// A `;`-delimited statement yielded no tokens once the subject was removed.
    #[error("malformed section for subject '{subject}': statement {statement} is empty")]
    EmptyStatement { subject: String, statement: usize },
}

impl ConvertError {
    /// Stable snake_case identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Read { .. } => "read",
            ConvertError::Write { .. } => "write",
            ConvertError::EmptySection { .. } => "empty_section",
            ConvertError::EmptyStatement { .. } => "empty_statement",
        }
    }

    /// True for errors caused by the document's structure rather than I/O.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ConvertError::EmptySection { .. } | ConvertError::EmptyStatement { .. }
        )
    }

    /// Serialize to a JSON object with `kind` and `message`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind":    self.kind(),
            "message": self.to_string(),
        })
    }
}
