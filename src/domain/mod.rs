//! Domain layer - Note selection and page rewriting

pub mod note;
pub mod router;
pub mod slug;
pub mod tags;
pub mod transform;

pub use note::NoteId;
pub use router::TagTargets;
pub use slug::slug_from_title;
pub use tags::extract_tags;
pub use transform::{transform_note, FrontMatter, TransformOutcome};
