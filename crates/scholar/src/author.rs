//! Author and publication types for the scholar library.
//!
//! This module provides the types used to represent an author's profile and
//! publication record as retrieved from the Semantic Scholar Graph API. A
//! profile carries lightweight publication summaries (title and year); the
//! full author list of a publication is populated separately by filling it
//! through [`crate::clients::SemanticScholarClient::fetch_paper`].
//!
//! # Examples
//!
//! ```no_run
//! use scholar::clients::SemanticScholarClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SemanticScholarClient::new();
//!
//! // Search for an author and retrieve their profile
//! let candidates = client.search_authors("Scott Shenker").await?;
//! let profile = client.fetch_author(&candidates[0].author_id).await?;
//! println!("{} has {} publications", profile.name, profile.publications.len());
//! # Ok(())
//! # }
//! ```

use super::*;

/// Separator between author names in a filled publication's author string.
pub const AUTHOR_SEPARATOR: &str = " and ";

/// A match returned by an author name search.
///
/// Candidates carry only enough information to pick one and fetch the full
/// profile afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorCandidate {
  /// Service-assigned identifier for the author
  pub author_id: String,
  /// The author's display name
  pub name:      String,
}

/// An author's profile together with their publication record.
///
/// Profiles are obtained once per run via
/// [`crate::coauthors::get_author_info`] or
/// [`crate::clients::SemanticScholarClient::fetch_author`] and are not
/// modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
  /// Service-assigned identifier for the author
  pub author_id:    String,
  /// The author's canonical display name
  pub name:         String,
  /// Publication summaries in the order the service listed them
  pub publications: Vec<Publication>,
}

/// A single publication attached to an author profile.
///
/// Profiles list publications as summaries: title and year only. Filling a
/// publication via [`crate::clients::SemanticScholarClient::fetch_paper`]
/// additionally populates the `author` field with the full author list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
  /// Service-assigned identifier for the publication
  pub paper_id: String,
  /// The publication's title, if the service has one
  pub title:    Option<String>,
  /// Publication year, if known
  pub year:     Option<i32>,
  /// Full author list joined with [`AUTHOR_SEPARATOR`], present once filled
  pub author:   Option<String>,
}

impl Publication {
  /// Returns the publication year, treating an unknown year as 0.
  ///
  /// Sorting by this key in descending order places publications without a
  /// usable year after every dated one.
  ///
  /// # Examples
  ///
  /// ```
  /// use scholar::author::Publication;
  ///
  /// let publication = Publication {
  ///   paper_id: "649def34f8be52c8b66281af98ae884c09aef38b".to_string(),
  ///   title:    Some("Construction of the Literature Graph in Semantic Scholar".to_string()),
  ///   year:     None,
  ///   author:   None,
  /// };
  /// assert_eq!(publication.pub_year(), 0);
  /// ```
  pub fn pub_year(&self) -> i32 { self.year.unwrap_or(0) }
}
