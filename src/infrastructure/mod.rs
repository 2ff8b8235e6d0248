//! Infrastructure layer - Filesystem and configuration I/O

pub mod attachments;
pub mod config;
pub mod repository;

pub use attachments::{copy_attachments, AttachmentReport};
pub use config::{PageEntry, PublishTag, SiteConfig};
pub use repository::{NoteEntry, NotesRepository};
