//! Client implementations for fetching author records from scholarly-data services.
//!
//! This module provides the HTTP clients the library uses to talk to external
//! services. Each submodule implements service-specific logic for:
//! - Building API requests
//! - Parsing responses
//! - Converting records to the common [`AuthorProfile`] and [`Publication`] types
//!
//! # Supported Services
//!
//! - [`semantic_scholar`] - Client for the Semantic Scholar Graph API
//!
//! # Examples
//!
//! ```no_run
//! use scholar::clients::SemanticScholarClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SemanticScholarClient::new();
//! let candidates = client.search_authors("Dennis DeCoste").await?;
//!
//! for candidate in &candidates {
//!   println!("{}: {}", candidate.author_id, candidate.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod semantic_scholar;

pub use semantic_scholar::SemanticScholarClient;

use super::*;
