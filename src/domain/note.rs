//! Note filename classification

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Matches "202102012138 note title.md" and "202102012138.md".
fn note_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([0-9]{12}).*\.md$").unwrap())
}

/// The 12-digit `YYYYMMDDHHMM` identifier that prefixes every note filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Classify a filename, returning its identifier if it names a note.
    ///
    /// Only the name is inspected; callers reject directories before asking.
    pub fn from_filename(filename: &str) -> Option<Self> {
        note_name_regex()
            .captures(filename)
            .map(|cap| NoteId(cap[1].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Page date, `YYYY-MM-DD`, taken from the first eight digits.
    ///
    /// The digits are not validated as a calendar date.
    pub fn date(&self) -> String {
        format!("{}-{}-{}", &self.0[..4], &self.0[4..6], &self.0[6..8])
    }

    /// Name of the exported page file.
    pub fn page_filename(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
