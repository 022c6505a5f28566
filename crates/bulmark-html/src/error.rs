//! Error types for bulmark-html

use thiserror::Error;

/// Error type for rendering operations.
///
/// Rendering to a `String` cannot fail; the only failure mode is the
/// caller-supplied sink rejecting a write, which is surfaced here as-is.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The output sink failed while the rendered markup was being written.
	#[error("failed to write rendered markup to sink")]
	Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
