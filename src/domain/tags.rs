//! Tag line detection and hashtag extraction

use regex::Regex;
use std::io::{self, BufRead};
use std::sync::OnceLock;

/// Prefix that marks the line carrying a note's tags.
pub const TAG_LINE_PREFIX: &str = "Tags: ";

/// Matches one tag; the capture excludes the pound sign.
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#(\S+)").unwrap())
}

/// Whether a line is a tag line (case-sensitive, trailing space required).
pub fn is_tag_line(line: &str) -> bool {
    line.starts_with(TAG_LINE_PREFIX)
}

/// Tags on a single tag line, in order, without repeats.
pub fn tags_from_line(line: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for cap in tag_regex().captures_iter(line) {
        let tag = &cap[1];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Tags declared on the first tag line of `text`, or none.
pub fn extract_tags(text: &str) -> Vec<String> {
    text.lines()
        .find(|line| is_tag_line(line))
        .map(tags_from_line)
        .unwrap_or_default()
}

/// Streaming form of [`extract_tags`]; stops reading at the first tag line.
pub fn read_tags<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    for line in reader.lines() {
        let line = line?;
        if is_tag_line(&line) {
            return Ok(tags_from_line(&line));
        }
    }
    Ok(Vec::new())
}
