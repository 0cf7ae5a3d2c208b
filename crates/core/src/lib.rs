//! ttlflat-core: Turtle-to-flat-path converter core library.
//!
//! Turns a Turtle document into sorted lines of the form
//! `<subject> <<p1|p2|...>>[<i1,i2,...>] <object>`, one per object reached
//! from each root subject, following objects that are themselves
//! subjects elsewhere in the document.
//!
//! # Public API
//!
//! - [`convert()`] / [`convert_file()`] -- run the full pipeline
//! - [`ConvertOptions`] -- excluded root prefixes
//! - [`ConvertError`] -- conversion error type
//! - [`Sections`], [`Statement`], [`FlatLine`], [`ConversionStats`]
//!
//! Individual stage entry points are also re-exported for selective
//! pipeline execution.

pub mod convert;
pub mod error;
pub mod flatten;
pub mod lexer;
pub mod line;
pub mod normalize;
pub mod options;
pub mod sections;
pub mod source;
pub mod split;
pub mod stats;

// ── Convenience re-exports: key types ────────────────────────────────

pub use convert::Conversion;
pub use error::ConvertError;
pub use line::FlatLine;
pub use options::{ConvertOptions, DEFAULT_EXCLUDED_ROOT_PREFIXES};
pub use sections::{Sections, Statement};
pub use source::{FileSystemProvider, InMemoryProvider, SourceProvider};
pub use split::Delimiter;
pub use stats::{ColumnStats, ConversionStats};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use convert::{convert, convert_file};
pub use flatten::{flatten, flatten_root};
pub use lexer::tokenize;
pub use line::render_sorted;
pub use normalize::normalize;
pub use sections::build_sections;
pub use source::output_path_for;
pub use split::split_outside_quotes;
