//! Co-author extraction over an author's publication record.
//!
//! This module implements the pipeline the CLI is built on: resolve an author
//! by name, walk their publication record newest-first, fill each publication
//! inside the look-back window, and collect the co-author names found on it.
//! Failures from the service are logged and collapse to absence, so a flaky
//! publication never aborts a run.
//!
//! # Examples
//!
//! ```no_run
//! use scholar::{clients::SemanticScholarClient, coauthors};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SemanticScholarClient::new();
//!
//! if let Some(author) = coauthors::get_author_info(&client, "Dennis DeCoste").await {
//!   let papers = coauthors::extract_coauthors(&client, &author, 1).await;
//!   for (title, coauthors) in &papers {
//!     println!("{title}: {coauthors:?}");
//!   }
//! }
//! # Ok(())
//! # }
//! ```

use std::cmp::Reverse;

use super::*;

/// Map from publication title to the set of co-author names on that publication.
///
/// Titles are not guaranteed unique; when an author's record lists two
/// publications with the same title, the one processed last overwrites the
/// earlier entry.
pub type CoauthorMap = BTreeMap<String, BTreeSet<String>>;

/// Looks up an author by name and retrieves their publication record.
///
/// The first candidate returned by the search is taken as the author, and
/// their full profile is fetched. Search and retrieval failures are logged
/// and converted to `None`, so a missing author and a failed lookup read the
/// same to callers.
///
/// # Arguments
///
/// * `client` - The API client to resolve the author through
/// * `author` - The author's display name (e.g., "Scott Shenker")
pub async fn get_author_info(
  client: &SemanticScholarClient,
  author: &str,
) -> Option<AuthorProfile> {
  let candidates = match client.search_authors(author).await {
    Ok(candidates) => candidates,
    Err(e) => {
      warn!("Error retrieving author info: {e}");
      return None;
    },
  };

  let Some(candidate) = candidates.first() else {
    warn!("No author found for name: {author}");
    return None;
  };

  match client.fetch_author(&candidate.author_id).await {
    Ok(profile) => Some(profile),
    Err(e) => {
      warn!("Error retrieving author info: {e}");
      None
    },
  }
}

/// Extracts co-authors of the given author within a look-back window.
///
/// Publications are sorted by year descending (unknown years sort last as 0)
/// and scanned in that order. Each publication whose year lies within
/// `current_year - pub_year <= years` is filled via the client, its author
/// string split on [`AUTHOR_SEPARATOR`], and the queried author's own name
/// removed. The scan stops at the first publication older than the window;
/// publications without a usable year are skipped without ending the scan.
///
/// A publication that fails to fill is logged and omitted from the result,
/// as is one whose filled record carries no author string.
///
/// # Arguments
///
/// * `client` - The API client to fill publications through
/// * `author_info` - The author's profile, as returned by [`get_author_info`]
/// * `years` - The number of years to look back for co-authorship, inclusive
pub async fn extract_coauthors(
  client: &SemanticScholarClient,
  author_info: &AuthorProfile,
  years: i32,
) -> CoauthorMap {
  let current_year = Utc::now().year();
  let mut paper_coauthors = CoauthorMap::new();

  let mut sorted_pubs = author_info.publications.clone();
  sorted_pubs.sort_by_key(|publication| Reverse(publication.pub_year()));

  for publication in &sorted_pubs {
    let pub_year = publication.pub_year();
    if pub_year == 0 {
      // Year unknown, cannot place the publication in the window.
      continue;
    }
    if current_year - pub_year > years {
      // Sorted newest first, so everything from here on is older still.
      break;
    }

    match client.fetch_paper(&publication.paper_id).await {
      Ok(filled) => {
        debug!("Filled publication: {filled:?}");
        let title = filled.title.unwrap_or_else(|| "No title".to_string());
        let authors = filled.author.unwrap_or_default();
        if !authors.is_empty() {
          paper_coauthors.insert(title, coauthor_set(&authors, &author_info.name));
        }
      },
      Err(e) => warn!("Error filling publication: {e}"),
    }
  }

  paper_coauthors
}

/// Splits an author string into the set of co-author names.
///
/// The string is split on [`AUTHOR_SEPARATOR`] and the queried author's own
/// name is removed by exact string match.
pub fn coauthor_set(authors: &str, author_name: &str) -> BTreeSet<String> {
  let mut coauthors: BTreeSet<String> =
    authors.split(AUTHOR_SEPARATOR).map(str::to_owned).collect();
  coauthors.remove(author_name);
  coauthors
}

/// Unions the per-publication co-author sets into one set of names.
pub fn all_coauthors(paper_coauthors: &CoauthorMap) -> BTreeSet<String> {
  paper_coauthors.values().flatten().cloned().collect()
}
