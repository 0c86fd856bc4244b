//! A library for retrieving an academic author's publication record from the
//! Semantic Scholar Graph API and extracting their recent co-authors.
//!
//! # Example
//! ```rust,no_run
//! use scholar::{clients::SemanticScholarClient, coauthors};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let client = SemanticScholarClient::new();
//!
//!   // Resolve the author, then collect co-authors from the last two years
//!   if let Some(author) = coauthors::get_author_info(&client, "Scott Shenker").await {
//!     let papers = coauthors::extract_coauthors(&client, &author, 2).await;
//!     println!("Co-authors: {:?}", coauthors::all_coauthors(&papers));
//!   }
//!
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod author;
pub mod clients;
pub mod coauthors;
pub mod errors;

use author::{AuthorCandidate, AuthorProfile, Publication, AUTHOR_SEPARATOR};
use clients::SemanticScholarClient;
use errors::ScholarError;
