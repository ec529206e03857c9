//! Error types for processor construction.
//!
//! The contract itself has no recoverable-error channel: every operation
//! returns a value (possibly empty) or is a pure predicate. The only hard
//! failure is constructing a processor without markers.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building a processor.
#[derive(Debug, Error, Diagnostic)]
pub enum ProcessorError {
    /// A processor must recognize at least its primary marker.
    #[error("a processor requires at least one annotation marker")]
    #[diagnostic(
        code(membergen::empty_marker_set),
        help("pass the primary marker first, followed by any equivalent spellings")
    )]
    EmptyMarkerSet,
}
