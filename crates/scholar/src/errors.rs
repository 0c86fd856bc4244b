//! Error types for the scholar library.
//!
//! This module provides a comprehensive error type that encompasses all possible
//! failure modes when working with author records, including:
//! - Network and API errors
//! - Missing authors or publications
//! - URL construction
//!
//! # Examples
//!
//! ```
//! use scholar::{clients::SemanticScholarClient, errors::ScholarError};
//!
//! # async fn example() -> Result<(), ScholarError> {
//! let client = SemanticScholarClient::new();
//! match client.fetch_author("2262347").await {
//!   Ok(profile) => println!("Found {}", profile.name),
//!   Err(ScholarError::NotFound) => println!("No such author"),
//!   Err(ScholarError::Network(e)) => println!("Network error: {}", e),
//!   Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Errors that can occur when working with the scholar library.
///
/// This enum provides a comprehensive set of error cases that can occur when:
/// - Searching for authors by name
/// - Fetching author profiles and publication details
/// - Building request URLs
///
/// Most error variants provide additional context through either custom messages
/// or wrapped underlying errors.
#[derive(Error, Debug)]
pub enum ScholarError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The requested author or publication couldn't be found.
  ///
  /// This occurs when the identifier is valid but the record doesn't exist
  /// in the service, or it has been removed.
  #[error("Record not found")]
  NotFound,

  /// The API returned an error response.
  ///
  /// This occurs when the Semantic Scholar API returns an unexpected status
  /// or a response body that can't be parsed. The string parameter contains
  /// the error detail for debugging.
  #[error("API error: {0}")]
  ApiError(String),

  /// Failed to parse a URL.
  ///
  /// This occurs when a request URL built from the configured base URL and
  /// an identifier is invalid.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),
}
