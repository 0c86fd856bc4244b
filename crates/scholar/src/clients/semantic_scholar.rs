//! Client implementation for the Semantic Scholar Graph API.
//!
//! This module provides functionality to search for authors by name, retrieve
//! an author's profile with their publication record, and fill individual
//! publications with their full author lists. Responses are converted into the
//! common [`AuthorProfile`] and [`Publication`] types.
//!
//! The client uses the Graph API (https://api.semanticscholar.org/graph/v1)
//! and requests only the fields it needs, so profile retrieval stays cheap
//! and author lists are fetched one publication at a time.
//!
//! # Examples
//!
//! ```no_run
//! use scholar::clients::SemanticScholarClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SemanticScholarClient::new();
//! let candidates = client.search_authors("Dennis DeCoste").await?;
//! let profile = client.fetch_author(&candidates[0].author_id).await?;
//!
//! println!("Name: {}", profile.name);
//! println!("Publications: {}", profile.publications.len());
//! # Ok(())
//! # }
//! ```

use url::Url;

use super::*;

/// Default base URL of the Semantic Scholar Graph API.
const DEFAULT_BASE_URL: &str = "https://api.semanticscholar.org/graph/v1";

/// Fields requested when retrieving an author's profile.
const AUTHOR_FIELDS: &str = "name,papers.title,papers.year";

/// Fields requested when filling a single publication.
const PAPER_FIELDS: &str = "title,year,authors";

/// Response structure from the author search endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
  /// The page of authors matching the query
  #[serde(default)]
  data: Vec<AuthorEntry>,
}

/// An author record from the graph API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorEntry {
  /// Service-assigned author identifier
  author_id: String,
  /// The author's display name
  name:      String,
  /// The author's papers, present when the `papers` fields were requested
  #[serde(default)]
  papers:    Vec<PaperEntry>,
}

/// A paper record from the graph API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaperEntry {
  /// Service-assigned paper identifier
  paper_id: String,
  /// Paper title, which the service may not have
  title:    Option<String>,
  /// Publication year, which the service may not have
  year:     Option<i32>,
  /// The paper's author list, present when the `authors` field was requested
  #[serde(default)]
  authors:  Vec<PaperAuthor>,
}

/// An entry in a paper's author list.
#[derive(Debug, Deserialize)]
struct PaperAuthor {
  /// The author's display name
  name: String,
}

/// Client for the Semantic Scholar Graph API.
///
/// This client provides methods to search for authors, fetch author profiles,
/// and fill publications with their full author lists. It handles request
/// construction, response parsing, and conversion to the library's common
/// types.
///
/// A single client reuses one HTTP connection pool, so it should be created
/// once and shared across requests.
pub struct SemanticScholarClient {
  /// Internal web client used to connect to the API.
  client:   reqwest::Client,
  /// The base URL to use for the client.
  base_url: String,
}

impl SemanticScholarClient {
  /// Creates a new client for the public Semantic Scholar Graph API.
  pub fn new() -> Self { Self::with_base_url(DEFAULT_BASE_URL) }

  /// Creates a client that talks to a custom base URL.
  ///
  /// Useful for pointing the client at a mock server in tests, or at a
  /// self-hosted API-compatible service.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      client:   reqwest::Client::builder()
                .user_agent(concat!("scholar/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap(),
      base_url: base_url.into(),
    }
  }

  /// Searches for authors matching a free-text name query.
  ///
  /// # Arguments
  ///
  /// * `query` - The author name to search for (e.g., "Scott Shenker")
  ///
  /// # Returns
  ///
  /// Returns a [`Result`] containing either:
  /// - A list of [`AuthorCandidate`]s in the service's relevance order, which
  ///   is empty when nothing matches
  /// - A [`ScholarError`] if the request or parsing fails
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use scholar::clients::SemanticScholarClient;
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// let client = SemanticScholarClient::new();
  /// let candidates = client.search_authors("Scott Shenker").await?;
  ///
  /// if let Some(first) = candidates.first() {
  ///   println!("Best match: {}", first.name);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  pub async fn search_authors(&self, query: &str) -> Result<Vec<AuthorCandidate>, ScholarError> {
    let mut url = Url::parse(&format!("{}/author/search", self.base_url))?;
    url.query_pairs_mut().append_pair("query", query).append_pair("fields", "name");

    let search: SearchResponse = self.get_json(url).await?;

    Ok(
      search
        .data
        .into_iter()
        .map(|entry| AuthorCandidate { author_id: entry.author_id, name: entry.name })
        .collect(),
    )
  }

  /// Fetches an author's profile, including their publication summaries.
  ///
  /// The returned profile lists each publication with its title and year
  /// only; author lists are filled per publication via [`Self::fetch_paper`].
  ///
  /// # Arguments
  ///
  /// * `author_id` - A Semantic Scholar author identifier (e.g., "2262347")
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The network request fails
  /// - The author doesn't exist ([`ScholarError::NotFound`])
  /// - The API response cannot be parsed
  pub async fn fetch_author(&self, author_id: &str) -> Result<AuthorProfile, ScholarError> {
    let mut url = Url::parse(&format!("{}/author/{}", self.base_url, author_id))?;
    url.query_pairs_mut().append_pair("fields", AUTHOR_FIELDS);

    let entry: AuthorEntry = self.get_json(url).await?;

    let publications = entry
      .papers
      .into_iter()
      .map(|paper| Publication {
        paper_id: paper.paper_id,
        title:    paper.title,
        year:     paper.year,
        author:   None,
      })
      .collect();

    Ok(AuthorProfile { author_id: entry.author_id, name: entry.name, publications })
  }

  /// Fills a single publication with its full author list.
  ///
  /// The author names are joined with [`AUTHOR_SEPARATOR`] into one string;
  /// a publication the service lists without authors is returned with an
  /// empty `author` field.
  ///
  /// # Arguments
  ///
  /// * `paper_id` - A Semantic Scholar paper identifier
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The network request fails
  /// - The publication doesn't exist ([`ScholarError::NotFound`])
  /// - The API response cannot be parsed
  pub async fn fetch_paper(&self, paper_id: &str) -> Result<Publication, ScholarError> {
    let mut url = Url::parse(&format!("{}/paper/{}", self.base_url, paper_id))?;
    url.query_pairs_mut().append_pair("fields", PAPER_FIELDS);

    let entry: PaperEntry = self.get_json(url).await?;

    let names = entry.authors.iter().map(|author| author.name.as_str()).collect::<Vec<_>>();
    let author = if names.is_empty() { None } else { Some(names.join(AUTHOR_SEPARATOR)) };

    Ok(Publication { paper_id: entry.paper_id, title: entry.title, year: entry.year, author })
  }

  /// Issues a GET request and deserializes the JSON response body.
  async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ScholarError> {
    debug!("Fetching from Semantic Scholar via: {url}");

    let response = self.client.get(url).send().await?;
    let status = response.status();
    debug!("Semantic Scholar response status: {status}");

    if !status.is_success() {
      return Err(match status.as_u16() {
        404 => ScholarError::NotFound,
        429 => ScholarError::ApiError("Rate limit exceeded, try again in a few seconds".into()),
        s if s >= 500 => ScholarError::ApiError(format!("Service unavailable (HTTP {s})")),
        s => ScholarError::ApiError(format!("Unexpected response (HTTP {s})")),
      });
    }

    let text = response.text().await?;
    serde_json::from_str(&text)
      .map_err(|e| ScholarError::ApiError(format!("Failed to parse JSON: {}", e)))
  }
}

impl Default for SemanticScholarClient {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
  };

  use super::*;

  #[test]
  fn test_author_entry_deserialize() {
    let json = serde_json::json!({
      "authorId": "2262347",
      "name": "Scott Shenker",
      "papers": [
        { "paperId": "p1", "title": "A Paper", "year": 2024 },
        { "paperId": "p2", "title": null, "year": null }
      ]
    });

    let entry: AuthorEntry = serde_json::from_value(json).unwrap();
    assert_eq!(entry.author_id, "2262347");
    assert_eq!(entry.name, "Scott Shenker");
    assert_eq!(entry.papers.len(), 2);
    assert_eq!(entry.papers[0].year, Some(2024));
    assert!(entry.papers[1].title.is_none());
  }

  #[test]
  fn test_author_entry_deserialize_without_papers() {
    let json = serde_json::json!({ "authorId": "123", "name": "Ada Lovelace" });

    let entry: AuthorEntry = serde_json::from_value(json).unwrap();
    assert!(entry.papers.is_empty());
  }

  #[test]
  fn test_search_response_deserialize_empty() {
    let json = serde_json::json!({ "total": 0, "offset": 0, "data": [] });

    let search: SearchResponse = serde_json::from_value(json).unwrap();
    assert!(search.data.is_empty());
  }

  #[tokio::test]
  async fn test_search_authors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/author/search"))
      .and(query_param("query", "Ada Lovelace"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "total": 1,
        "offset": 0,
        "data": [{ "authorId": "145", "name": "Ada Lovelace" }]
      })))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let candidates = client.search_authors("Ada Lovelace").await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].author_id, "145");
    assert_eq!(candidates[0].name, "Ada Lovelace");
  }

  #[tokio::test]
  async fn test_fetch_author_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/author/145"))
      .and(query_param("fields", AUTHOR_FIELDS))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "authorId": "145",
        "name": "Ada Lovelace",
        "papers": [{ "paperId": "p1", "title": "Notes on the Analytical Engine", "year": 1843 }]
      })))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let profile = client.fetch_author("145").await.unwrap();

    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.publications.len(), 1);
    assert_eq!(profile.publications[0].title.as_deref(), Some("Notes on the Analytical Engine"));
    // Summaries are unfilled until fetch_paper is called for them.
    assert!(profile.publications[0].author.is_none());
  }

  #[tokio::test]
  async fn test_fetch_paper_joins_author_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/paper/p1"))
      .and(query_param("fields", PAPER_FIELDS))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "paperId": "p1",
        "title": "Notes on the Analytical Engine",
        "year": 1843,
        "authors": [
          { "authorId": "145", "name": "Ada Lovelace" },
          { "authorId": null, "name": "Charles Babbage" }
        ]
      })))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let publication = client.fetch_paper("p1").await.unwrap();

    assert_eq!(publication.author.as_deref(), Some("Ada Lovelace and Charles Babbage"));
    assert_eq!(publication.year, Some(1843));
  }

  #[tokio::test]
  async fn test_fetch_paper_without_authors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/paper/p2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "paperId": "p2",
        "title": "An Anonymous Report",
        "year": 2001,
        "authors": []
      })))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let publication = client.fetch_paper("p2").await.unwrap();

    assert!(publication.author.is_none());
  }

  #[tokio::test]
  async fn test_missing_record_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/author/999"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let err = client.fetch_author("999").await.unwrap_err();

    assert!(matches!(err, ScholarError::NotFound));
  }

  #[tokio::test]
  async fn test_server_error_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/paper/p1"))
      .respond_with(ResponseTemplate::new(503))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let err = client.fetch_paper("p1").await.unwrap_err();

    match err {
      ScholarError::ApiError(msg) => assert!(msg.contains("unavailable"), "unexpected: {msg}"),
      other => panic!("expected ApiError, got: {other:?}"),
    }
  }

  #[tokio::test]
  async fn test_malformed_response_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/author/search"))
      .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
      .mount(&mock_server)
      .await;

    let client = SemanticScholarClient::with_base_url(mock_server.uri());
    let err = client.search_authors("anyone").await.unwrap_err();

    match err {
      ScholarError::ApiError(msg) => assert!(msg.contains("parse"), "unexpected: {msg}"),
      other => panic!("expected ApiError, got: {other:?}"),
    }
  }
}
