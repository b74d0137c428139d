//! Error types for conversions whose width is only known at run time.

use thiserror::Error;

/// Errors produced by [crate::layout::Layout::read].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Width is larger than the target integer's native size.
    #[error("cannot read {width} bytes into a {native}-byte integer")]
    WidthTooLarge { width: usize, native: usize },
    /// Input length differs from the layout's width.
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// Layout width is zero.
    #[error("width must be at least one byte")]
    ZeroWidth,
}

/// Errors produced by [crate::layout::Layout::write].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// Width is smaller than the source integer's native size.
    #[error("cannot write a {native}-byte integer into {width} bytes")]
    WidthTooSmall { width: usize, native: usize },
    /// Output buffer length differs from the layout's width.
    #[error("expected a {expected}-byte buffer, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
