//! Pure formatting helpers for the book cards. Kept free of any DOM types
//! so they can be unit tested on the host.

use common::model::book::{Author, Book};
use num_format::{Locale, ToFormattedString};

/// Boilerplate sentence the catalog appends to generated summaries.
const SUMMARY_BOILERPLATE: &str = "This is an automatically generated summary.";

/// Longest summary excerpt shown on a card, in characters.
const SUMMARY_LIMIT: usize = 280;

/// How many subject chips a card shows before collapsing into "+N more".
pub const MAX_SUBJECTS: usize = 3;

/// First summary paragraph with the boilerplate sentence stripped and the
/// text cut at [`SUMMARY_LIMIT`] characters. `None` when there is nothing
/// left to show.
pub fn short_summary(summaries: &[String]) -> Option<String> {
    let first = summaries.first()?;
    let cleaned = first.replacen(SUMMARY_BOILERPLATE, "", 1);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    if cleaned.chars().count() <= SUMMARY_LIMIT {
        return Some(cleaned.to_string());
    }
    let cut: String = cleaned.chars().take(SUMMARY_LIMIT).collect();
    Some(format!("{}\u{2026}", cut.trim_end()))
}

/// Up to [`MAX_SUBJECTS`] subject chips (each subject truncated at its first
/// " -- " qualifier) plus the number of subjects left over.
pub fn subject_chips(subjects: &[String]) -> (Vec<String>, usize) {
    let chips = subjects
        .iter()
        .take(MAX_SUBJECTS)
        .map(|s| s.split(" -- ").next().unwrap_or(s).to_string())
        .collect();
    let overflow = subjects.len().saturating_sub(MAX_SUBJECTS);
    (chips, overflow)
}

/// Author names joined by ", ".
pub fn author_line(authors: &[Author]) -> String {
    authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "(birth - death)" for the lead author, only when both years are known.
pub fn lead_author_years(authors: &[Author]) -> Option<String> {
    let lead = authors.first()?;
    match (lead.birth_year, lead.death_year) {
        (Some(birth), Some(death)) => Some(format!("({} - {})", birth, death)),
        _ => None,
    }
}

/// Download count with locale-style thousands separators.
pub fn format_downloads(book: &Book) -> String {
    book.download_count.to_formatted_string(&Locale::en)
}

/// Language codes joined and upper-cased, e.g. "EN, FR".
pub fn language_line(languages: &[String]) -> String {
    languages.join(", ").to_uppercase()
}
