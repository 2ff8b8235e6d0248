//! Notes directory access

use crate::domain::tags::read_tags;
use crate::domain::NoteId;
use crate::error::{DrozError, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A note file found in the notes directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub id: NoteId,
    pub filename: String,
    pub path: PathBuf,
}

/// Read-only view of a notes directory
#[derive(Debug, Clone)]
pub struct NotesRepository {
    root: PathBuf,
}

impl NotesRepository {
    pub fn new(root: PathBuf) -> Self {
        NotesRepository { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List note files directly inside the root, sorted by file name.
    ///
    /// Directories and names without a 12-digit prefix and `.md` extension are
    /// skipped. Two notes sharing an id are both listed; the later one's export
    /// overwrites the earlier page.
    pub fn list_notes(&self) -> Result<Vec<NoteEntry>> {
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut notes = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(DrozError::NotesDirectory {
                        path: self.root.clone(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            let Some(filename) = entry.file_name().to_str() else {
                continue;
            };
            let Some(id) = NoteId::from_filename(filename) else {
                debug!("Not a note: {}", filename);
                continue;
            };

            notes.push(NoteEntry {
                id,
                filename: filename.to_string(),
                path: entry.path().to_path_buf(),
            });
        }

        Ok(notes)
    }

    /// Tags from the note's tag line
    pub fn read_tags(&self, note: &NoteEntry) -> Result<Vec<String>> {
        let file = File::open(&note.path)?;
        Ok(read_tags(BufReader::new(file))?)
    }
}
