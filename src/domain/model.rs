use serde::{Deserialize, Serialize};

/// Metadata scraped from a single PubMed article page.
///
/// Column names follow the CSV layout the downstream processing step
/// expects (`coi`, `abstracts`, ...). Every field except `url` is optional:
/// a selector that matches nothing on the page leaves the field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: Option<String>,
    pub publication_type: Option<String>,
    pub journal: Option<String>,
    #[serde(rename = "coi")]
    pub conflict_of_interest: Option<String>,
    pub grants: Option<String>,
    pub authors: Option<String>,
    #[serde(rename = "abstracts")]
    pub abstract_text: Option<String>,
    pub pmid: Option<String>,
    pub pmcid: Option<String>,
    pub doi: Option<String>,
    pub citation: Option<String>,
    pub erratum: Option<String>,
}

impl Article {
    /// Row emitted for a URL whose page could not be fetched.
    pub fn empty(url: String) -> Self {
        Self {
            url,
            title: None,
            publication_type: None,
            journal: None,
            conflict_of_interest: None,
            grants: None,
            authors: None,
            abstract_text: None,
            pmid: None,
            pmcid: None,
            doi: None,
            citation: None,
            erratum: None,
        }
    }

    pub fn has_metadata(&self) -> bool {
        self.title.is_some()
            || self.publication_type.is_some()
            || self.journal.is_some()
            || self.conflict_of_interest.is_some()
            || self.grants.is_some()
            || self.authors.is_some()
            || self.abstract_text.is_some()
            || self.pmid.is_some()
            || self.pmcid.is_some()
            || self.doi.is_some()
            || self.citation.is_some()
            || self.erratum.is_some()
    }
}

/// Result of the fetch-and-parse phase, in input order.
#[derive(Debug, Clone)]
pub struct ScrapeBatch {
    pub articles: Vec<Article>,
    pub failed_fetches: usize,
}
