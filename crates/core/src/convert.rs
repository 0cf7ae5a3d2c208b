//! Conversion pipeline: Turtle text -> sorted flat lines.
//!
//! This is a thin orchestrator that calls each stage in order:
//! normalize, build sections, flatten, then sort and join once.

use crate::error::ConvertError;
use crate::flatten;
use crate::line::render_sorted;
use crate::normalize::normalize;
use crate::options::ConvertOptions;
use crate::sections;
use crate::source::SourceProvider;
use crate::stats::{collect_stats, ConversionStats};
use std::path::Path;

/// The converted text and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub stats: ConversionStats,
}

/// Convert a Turtle document held in memory.
pub fn convert(ttl_text: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    tracing::info!(bytes = ttl_text.len(), "preprocessing TTL");
    let normalized = normalize(ttl_text);

    tracing::info!("splitting sections");
    let sections = sections::build_sections(&normalized)?;
    let roots = sections.subjects().filter(|s| options.is_root(s)).count();
    tracing::info!(sections = sections.len(), roots, "sections built");

    tracing::info!("converting to flat format");
    let lines = flatten::flatten(&sections, options);
    let stats = collect_stats(sections.len(), roots, &lines);
    let output = render_sorted(&lines);
    tracing::info!(lines = stats.lines, "conversion finished");

    Ok(Conversion { output, stats })
}

/// Read `input` through `provider`, convert it and write the result to `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    provider: &dyn SourceProvider,
    options: &ConvertOptions,
) -> Result<ConversionStats, ConvertError> {
    tracing::info!(file = %input.display(), "reading file");
    let ttl_text = provider
        .read_source(input)
        .map_err(|source| ConvertError::Read {
            path: input.to_path_buf(),
            source,
        })?;

    let conversion = convert(&ttl_text, options)?;

    tracing::info!(file = %output.display(), "writing converted format");
    provider
        .write_output(output, &conversion.output)
        .map_err(|source| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        })?;

    Ok(conversion.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryProvider;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn end_to_end_example() {
        let conv = convert(
            "a:1 p:name \"Alice\" ; p:knows a:2 . a:2 p:name \"Bob\" .",
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(
            conv.output,
            "a:1 <p:knows>[2] a:2\n\
             a:1 <p:knows|p:name>[2,1] \"Bob\"\n\
             a:1 <p:name>[1] \"Alice\"\n\
             a:2 <p:name>[1] \"Bob\""
        );
        assert_eq!(conv.stats.sections, 2);
        assert_eq!(conv.stats.roots, 2);
        assert_eq!(conv.stats.lines, 4);
    }

    #[test]
    fn quoted_terminator_does_not_open_a_new_section() {
        let conv = convert(
            "a:x p:hasNote \"Section 1; see note.\" .",
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(conv.stats.sections, 1);
        assert_eq!(conv.output, "a:x <p:hasNote>[1] \"Section 1; see note.\"");
    }

    #[test]
    fn empty_document_converts_to_empty_text() {
        let conv = convert("  \n", &ConvertOptions::default()).unwrap();
        assert_eq!(conv.output, "");
        assert_eq!(conv.stats.lines, 0);
    }

    #[test]
    fn conversion_is_repeatable() {
        let src = "wd:Q1 p:P31 s:a ; p:P31 s:b .\n\
                   s:a ps:P31 wd:Q5 .\n\
                   s:b ps:P31 wd:Q6 ; pq:P580 v:t .\n\
                   v:t wb:time \"2020\" .\n\
                   wd:Q2 p:P1 wd:Q1 .";
        let first = convert(src, &ConvertOptions::default()).unwrap();
        for _ in 0..5 {
            let again = convert(src, &ConvertOptions::default()).unwrap();
            assert_eq!(again.output, first.output);
        }
    }

    #[test]
    fn malformed_statement_surfaces_as_error() {
        let err = convert("ex:a ex:p ex:b ; ; ex:q ex:c .", &ConvertOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), "empty_statement");
    }

    #[test]
    fn convert_file_writes_output_through_provider() {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("/in.ttl"),
            "a:1 p:next a:2 .\na:2 p:val \"x\" .\n".to_string(),
        );
        let provider = InMemoryProvider::new(files);
        let stats = convert_file(
            Path::new("/in.ttl"),
            Path::new("/in.ttl.converted.txt"),
            &provider,
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(stats.lines, 3);
        assert_eq!(
            provider.get(Path::new("/in.ttl.converted.txt")).unwrap(),
            "a:1 <p:next>[1] a:2\na:1 <p:next|p:val>[1,1] \"x\"\na:2 <p:val>[1] \"x\""
        );
    }

    #[test]
    fn convert_file_reports_missing_input() {
        let provider = InMemoryProvider::default();
        let err = convert_file(
            Path::new("/nope.ttl"),
            Path::new("/nope.ttl.converted.txt"),
            &provider,
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "read");
        assert!(err.to_string().contains("/nope.ttl"));
        assert!(provider.get(Path::new("/nope.ttl.converted.txt")).is_none());
    }
}
