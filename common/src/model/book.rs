use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One page of the remote book catalog, as returned by
/// `GET <base>/books/?page=<n>`.
///
/// Pages are replaced wholesale on every fetch; the `next`/`previous` URLs
/// are part of the wire format but pagination is driven by a local page
/// counter instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPage {
    /// Total number of records known to the service.
    pub count: u64,
    /// URL of the following page, if any.
    pub next: Option<String>,
    /// URL of the preceding page, if any.
    pub previous: Option<String>,
    /// The records on this page, in service order.
    pub results: Vec<Book>,
}

/// A single catalog record. Read-only projection of what the remote service
/// owns; this application only renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub authors: Vec<Author>,
    pub summaries: Vec<String>,
    pub subjects: Vec<String>,
    pub bookshelves: Vec<String>,
    pub languages: Vec<String>,
    pub copyright: Option<bool>,
    pub media_type: String,
    /// Mapping of content type to download URL.
    pub formats: HashMap<String, String>,
    pub download_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down sample of a real Gutendex response body.
    const SAMPLE_PAGE: &str = r#"{
        "count": 76127,
        "next": "https://gutendex.com/books/?page=3",
        "previous": "https://gutendex.com/books/?page=1",
        "results": [{
            "id": 84,
            "title": "Frankenstein; Or, The Modern Prometheus",
            "authors": [{"name": "Shelley, Mary Wollstonecraft", "birth_year": 1797, "death_year": 1851}],
            "summaries": ["\"Frankenstein\" is a novel written in the early 19th century. This is an automatically generated summary."],
            "subjects": ["Frankenstein's monster (Fictitious character) -- Fiction", "Gothic fiction", "Horror tales", "Monsters -- Fiction"],
            "bookshelves": ["Gothic Fiction", "Movie Books"],
            "languages": ["en"],
            "copyright": false,
            "media_type": "Text",
            "formats": {"text/html": "https://www.gutenberg.org/ebooks/84.html.images"},
            "download_count": 104393
        }]
    }"#;

    #[test]
    fn deserializes_catalog_page() {
        let page: BookPage = serde_json::from_str(SAMPLE_PAGE).unwrap();
        assert_eq!(page.count, 76127);
        assert_eq!(page.results.len(), 1);

        let book = &page.results[0];
        assert_eq!(book.id, 84);
        assert_eq!(book.authors[0].birth_year, Some(1797));
        assert_eq!(book.subjects.len(), 4);
        assert_eq!(book.copyright, Some(false));
        assert_eq!(
            book.formats["text/html"],
            "https://www.gutenberg.org/ebooks/84.html.images"
        );
    }

    #[test]
    fn tolerates_null_author_years_and_copyright() {
        let json = r#"{"name": "Unknown", "birth_year": null, "death_year": null}"#;
        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.birth_year, None);
        assert_eq!(author.death_year, None);
    }
}
