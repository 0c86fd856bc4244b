//! Error types for the coauthors CLI application.
//!
//! This module provides a single error type that encompasses all possible
//! failure modes when running the CLI, including:
//! - User interaction errors
//! - Author lookup and publication retrieval errors
//!
//! The errors are designed to be transparent, allowing the underlying error
//! details to be displayed to the user while maintaining proper error
//! handling and propagation.

use thiserror::Error;

/// Errors that can occur during CLI operations.
///
/// This enum wraps the error types from dependencies and the underlying
/// library into a single error type for the CLI application. It uses the
/// `transparent` error handling pattern to preserve the original error
/// messages and context.
#[derive(Error, Debug)]
pub enum CoauthorsError {
  /// Errors from user interaction dialogs
  #[error(transparent)]
  Dialoguer(#[from] dialoguer::Error),

  /// Errors from the underlying scholar library
  #[error(transparent)]
  Scholar(#[from] scholar::errors::ScholarError),
}
