//! Error module: the error taxonomies for both translation directions.
//!
//! All errors are values returned to the caller; internal faults are intercepted
//! at the public entry points and converted into these variants.

use thiserror::Error;

/// Errors produced while compiling filter text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("filter must begin with '('")]
    MalformedFilter,

    #[error("unexpected end of filter at byte {pos}")]
    UnexpectedEndOfFilter { pos: usize },

    #[error("unexpected trailing input at byte {pos}")]
    UnexpectedTrailingInput { pos: usize },

    #[error("filter parse error at byte {pos}: {reason}")]
    FilterParseError { pos: usize, reason: String },
}

/// Errors produced while decompiling a tree back into filter text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompileError {
    #[error("unsupported filter kind: tag {tag}")]
    UnsupportedFilterKind { tag: u32 },

    #[error("filter decompile error: {reason}")]
    FilterDecompileError { reason: String },
}
