//! Attachment bundle copying

use crate::domain::NoteId;
use crate::error::Result;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of copying one note's attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentReport {
    pub copied: Vec<PathBuf>,
    pub failed: usize,
}

/// Source bundle of a note: `<notes_root>/files/<id>`.
pub fn source_dir(notes_root: &Path, id: &NoteId) -> PathBuf {
    notes_root.join("files").join(id.as_str())
}

/// Destination bundle of a page: `<destination>/<slug>/files/<id>`.
pub fn target_dir(destination: &Path, slug: &str, id: &NoteId) -> PathBuf {
    destination.join(slug).join("files").join(id.as_str())
}

/// Copy the files of a note's attachment bundle next to its exported page.
///
/// A note without a bundle copies nothing. Subdirectories are not copied.
/// A file that fails to copy is logged and counted; the rest are still tried.
pub fn copy_attachments(
    id: &NoteId,
    slug: &str,
    notes_root: &Path,
    destination: &Path,
) -> Result<AttachmentReport> {
    let source = source_dir(notes_root, id);
    let entries = match fs::read_dir(&source) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AttachmentReport::default()),
        Err(e) => return Err(e.into()),
    };

    let target = target_dir(destination, slug, id);
    fs::create_dir_all(&target)?;

    let mut report = AttachmentReport::default();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read entry in {}: {}", source.display(), e);
                report.failed += 1;
                continue;
            }
        };

        let from = entry.path();
        if from.is_dir() {
            debug!("Skipping attachment directory {}", from.display());
            continue;
        }

        let to = target.join(entry.file_name());
        match fs::copy(&from, &to) {
            Ok(_) => report.copied.push(to),
            Err(e) => {
                warn!("Failed to copy file {}: {}", from.display(), e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
