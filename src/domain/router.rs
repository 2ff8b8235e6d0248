//! Publish tag routing

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps publish tag names to the absolute directories their notes export to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTargets {
    targets: HashMap<String, PathBuf>,
}

impl TagTargets {
    /// Build the mapping `name -> site_root/content/target`.
    ///
    /// A tag name defined more than once keeps its last definition.
    pub fn new<'a, I>(site_root: &Path, publish_tags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let content = site_root.join("content");
        let targets = publish_tags
            .into_iter()
            .map(|(name, target)| (name.to_string(), content.join(target)))
            .collect();
        TagTargets { targets }
    }

    /// Destination directory for a tag, if it is a publish tag.
    pub fn resolve(&self, tag: &str) -> Option<&Path> {
        self.targets.get(tag).map(PathBuf::as_path)
    }

    /// Destinations for a note's tags, one per matching tag, in tag order.
    pub fn destinations<'a>(&'a self, tags: &'a [String]) -> impl Iterator<Item = &'a Path> + 'a {
        tags.iter().filter_map(|tag| self.resolve(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
