//! Export use case
//!
//! Walks the notes directory, routes each note by its publish tags and
//! writes one page per matching destination.

use crate::domain::transform::transform_note;
use crate::domain::{NoteId, TagTargets};
use crate::error::{DrozError, Result};
use crate::infrastructure::attachments::copy_attachments;
use crate::infrastructure::{NoteEntry, NotesRepository, SiteConfig};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Options for an export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory holding the notes and `sites/`
    pub notes_dir: PathBuf,

    /// Site root; pages go under `<site_root>/content`
    pub site_root: PathBuf,

    /// Treat a note without a title line as a failure instead of writing an
    /// empty page
    pub strict: bool,
}

/// A page written by the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPage {
    pub id: NoteId,
    pub slug: String,
    pub path: PathBuf,
    pub attachments: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub notes_scanned: usize,
    pub exports: Vec<ExportedPage>,
    pub failures: usize,
    pub attachment_failures: usize,
    /// Configured `pages` entries, which are not exported
    pub pages_skipped: usize,
}

impl ExportReport {
    pub fn pages_written(&self) -> usize {
        self.exports.len()
    }
}

/// Service for exporting notes into a site
pub struct ExportService {
    repository: NotesRepository,
    options: ExportOptions,
}

impl ExportService {
    pub fn new(options: ExportOptions) -> Self {
        ExportService {
            repository: NotesRepository::new(options.notes_dir.clone()),
            options,
        }
    }

    /// Run the export for a loaded site config.
    ///
    /// Only an unreadable notes directory fails the run; per-note problems are
    /// logged and counted in the report.
    pub fn execute(&self, config: &SiteConfig) -> Result<ExportReport> {
        let mut report = ExportReport {
            pages_skipped: config.pages.len(),
            ..ExportReport::default()
        };

        if !config.pages.is_empty() {
            info!(
                "{} page entr{} not processed",
                config.pages.len(),
                if config.pages.len() == 1 { "y" } else { "ies" }
            );
        }

        let targets = config.tag_targets(&self.options.site_root);
        if targets.is_empty() {
            return Ok(report);
        }

        for note in self.repository.list_notes()? {
            report.notes_scanned += 1;
            self.export_note(&note, &targets, &mut report);
        }

        Ok(report)
    }

    fn export_note(&self, note: &NoteEntry, targets: &TagTargets, report: &mut ExportReport) {
        let tags = match self.repository.read_tags(note) {
            Ok(tags) => tags,
            Err(e) => {
                warn!("Error reading file, skipping {}: {}", note.filename, e);
                report.failures += 1;
                return;
            }
        };

        for destination in targets.destinations(&tags) {
            info!("Exporting note {} to {}", note.filename, destination.display());
            match self.transfer(note, destination) {
                Ok((page, attachment_failures)) => {
                    report.attachment_failures += attachment_failures;
                    report.exports.push(page);
                }
                Err(e) => {
                    warn!("Failed to export {}: {}", note.filename, e);
                    report.failures += 1;
                }
            }
        }
    }

    /// Write one page and its attachments into `destination`.
    fn transfer(&self, note: &NoteEntry, destination: &Path) -> Result<(ExportedPage, usize)> {
        let source = File::open(&note.path)?;

        fs::create_dir_all(destination)?;
        let page_path = destination.join(note.id.page_filename());
        let page = File::create(&page_path)?;

        let outcome =
            match transform_note(&note.id, BufReader::new(source), BufWriter::new(page)) {
                Ok(outcome) => outcome,
                Err(e) => {
                    // A partial page must not replace a previous good export
                    if let Err(remove) = fs::remove_file(&page_path) {
                        warn!(
                            "Failed to remove partial page {}: {}",
                            page_path.display(),
                            remove
                        );
                    }
                    return Err(e.into());
                }
            };
        if !outcome.has_title() {
            if self.options.strict {
                fs::remove_file(&page_path)?;
                return Err(DrozError::MissingTitle(note.path.clone()));
            }
            warn!("No title line in {}, wrote an empty page", note.filename);
        }

        let mut attachments = 0;
        let mut attachment_failures = 0;
        match copy_attachments(&note.id, outcome.slug(), self.repository.root(), destination) {
            Ok(copied) => {
                attachments = copied.copied.len();
                attachment_failures = copied.failed;
            }
            Err(e) => {
                warn!("Failed to copy attachments of {}: {}", note.filename, e);
                attachment_failures += 1;
            }
        }

        Ok((
            ExportedPage {
                id: note.id.clone(),
                slug: outcome.slug().to_string(),
                path: page_path,
                attachments,
            },
            attachment_failures,
        ))
    }
}
