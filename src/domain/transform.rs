//! Note to page rewriting
//!
//! A single forward pass over the note: lines before the first level-1
//! heading are dropped, the heading becomes front matter, tag lines are
//! removed, blank lines are skipped until the first kept line after the
//! heading, and everything else is copied.

use crate::domain::note::NoteId;
use crate::domain::slug::slug_from_title;
use crate::domain::tags::is_tag_line;
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

const FRONT_MATTER_DELIMITER: &str = "---";

/// Matches a level-1 heading; the capture is the title.
fn title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^# (.*)$").unwrap())
}

/// Title of a level-1 heading line, if the line is one.
pub fn title_from_line(line: &str) -> Option<&str> {
    title_regex()
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Header block written at the top of an exported page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub slug: String,
}

impl FrontMatter {
    pub fn new(id: &NoteId, title: &str) -> Self {
        FrontMatter {
            title: title.to_string(),
            date: id.date(),
            slug: slug_from_title(title),
        }
    }

    /// Render with fixed key order. The title is quoted verbatim, not escaped.
    pub fn render(&self) -> String {
        format!(
            "{delim}\ntitle: \"{}\"\ndate: {}\nslug: \"{}\"\n{delim}\n",
            self.title,
            self.date,
            self.slug,
            delim = FRONT_MATTER_DELIMITER
        )
    }
}

/// What a transform found while rewriting a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    /// Front matter written, or `None` when the note had no title line and
    /// nothing was written.
    pub front_matter: Option<FrontMatter>,
}

impl TransformOutcome {
    /// Slug for attachment placement; empty when no title was found.
    pub fn slug(&self) -> &str {
        self.front_matter
            .as_ref()
            .map(|fm| fm.slug.as_str())
            .unwrap_or("")
    }

    pub fn has_title(&self) -> bool {
        self.front_matter.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BeforeTitle,
    SkippingBlanks,
    Body,
}

/// Rewrite a note read from `reader` into a page written to `writer`.
///
/// Output lines always end in `\n`, whatever the source used.
pub fn transform_note<R: BufRead, W: Write>(
    id: &NoteId,
    reader: R,
    mut writer: W,
) -> io::Result<TransformOutcome> {
    let mut phase = Phase::BeforeTitle;
    let mut front_matter = None;

    for line in reader.lines() {
        let line = line?;

        match phase {
            Phase::BeforeTitle => {
                if let Some(title) = title_from_line(&line) {
                    let fm = FrontMatter::new(id, title);
                    writer.write_all(fm.render().as_bytes())?;
                    front_matter = Some(fm);
                    phase = Phase::SkippingBlanks;
                }
                continue;
            }
            _ if is_tag_line(&line) => continue,
            Phase::SkippingBlanks if line.is_empty() => continue,
            Phase::SkippingBlanks => phase = Phase::Body,
            Phase::Body => {}
        }

        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(TransformOutcome { front_matter })
}
