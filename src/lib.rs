//! droz - Export tagged notes into a static site
//!
//! Selects timestamp-named Markdown notes by the publish tags on their tag
//! line and rewrites them into front-matter pages, copying each note's
//! attachment bundle alongside.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DrozError;
