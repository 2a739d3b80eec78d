use crate::domain::model::Article;
use crate::utils::error::{Result, ScrapeError};
use regex::Regex;
use scraper::{Html, Selector};

// CSS paths into PubMed's article page markup. The full-view heading block
// carries most identifiers; the abstract and disclosure blocks live in the
// article body.
const TITLE: &str = "header#heading.heading div#full-view-heading.full-view h1.heading-title";
const PUBLICATION_TYPE: &str =
    "header#heading.heading div#short-view-heading.short-view div.publication-type";
const JOURNAL: &str = "header#heading.heading div#full-view-heading.full-view \
     div.article-citation div.article-source div.journal-actions.dropdown-block \
     button#full-view-journal-trigger.journal-actions-trigger.trigger";
const COI: &str = "div#conflict-of-interest.conflict-of-interest div.statement p";
const GRANTS: &str = "div#grants.grants";
const AUTHORS: &str = "header#heading.heading div#full-view-heading.full-view \
     div.inline-authors div.authors div.authors-list";
const ABSTRACT: &str = "div#abstract.abstract div#eng-abstract.abstract-content.selected";
const PMID: &str = "header#heading.heading div#full-view-heading.full-view \
     ul#full-view-identifiers.identifiers li span.identifier.pubmed strong.current-id";
const PMCID: &str = "header#heading.heading div#full-view-heading.full-view \
     ul#full-view-identifiers.identifiers li span.identifier.pmc a.id-link";
const DOI: &str = "header#heading.heading div#full-view-heading.full-view \
     ul#full-view-identifiers.identifiers li span.identifier.doi a.id-link";
const CITATION: &str = "header#heading.heading div#full-view-heading.full-view \
     div.article-citation div.article-source span.cit";
const ERRATUM: &str =
    "main#article-details.article-details div#linked-correction-forward.linked-articles";

/// Pulls article metadata out of a PubMed page with pre-compiled selectors.
pub struct ArticleExtractor {
    title: Selector,
    publication_type: Selector,
    journal: Selector,
    coi: Selector,
    grants: Selector,
    authors: Selector,
    abstract_text: Selector,
    pmid: Selector,
    pmcid: Selector,
    doi: Selector,
    citation: Selector,
    erratum: Selector,
    whitespace: Regex,
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::SelectorError {
        selector: css.to_string(),
    })
}

impl ArticleExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: compile(TITLE)?,
            publication_type: compile(PUBLICATION_TYPE)?,
            journal: compile(JOURNAL)?,
            coi: compile(COI)?,
            grants: compile(GRANTS)?,
            authors: compile(AUTHORS)?,
            abstract_text: compile(ABSTRACT)?,
            pmid: compile(PMID)?,
            pmcid: compile(PMCID)?,
            doi: compile(DOI)?,
            citation: compile(CITATION)?,
            erratum: compile(ERRATUM)?,
            whitespace: Regex::new(r"\s+").map_err(|_| ScrapeError::SelectorError {
                selector: "whitespace".to_string(),
            })?,
        })
    }

    pub fn extract(&self, url: &str, html: &str) -> Article {
        let document = Html::parse_document(html);

        Article {
            url: url.to_string(),
            title: self.select_text(&document, &self.title),
            publication_type: self.select_text(&document, &self.publication_type),
            journal: self.select_text(&document, &self.journal),
            conflict_of_interest: self.select_text(&document, &self.coi),
            grants: self.select_text(&document, &self.grants),
            authors: self.select_text(&document, &self.authors),
            abstract_text: self.select_text(&document, &self.abstract_text),
            pmid: self.select_text(&document, &self.pmid),
            pmcid: self.select_text(&document, &self.pmcid),
            doi: self.select_text(&document, &self.doi),
            citation: self.select_text(&document, &self.citation),
            erratum: self.select_text(&document, &self.erratum),
        }
    }

    /// Per-element text, whitespace-collapsed and trimmed, joined with
    /// single spaces. No matches (or only blank matches) yields `None`.
    fn select_text(&self, document: &Html, selector: &Selector) -> Option<String> {
        let joined = document
            .select(selector)
            .map(|element| {
                let raw: String = element.text().collect();
                self.whitespace.replace_all(raw.trim(), " ").into_owned()
            })
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
