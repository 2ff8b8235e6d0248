//! Site export configuration

use crate::domain::TagTargets;
use crate::error::{DrozError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A tag whose notes are exported to `target` under the site content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishTag {
    pub name: String,
    pub target: String,
}

/// A single note pinned to a target. Parsed but not exported yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    #[serde(deserialize_with = "id_from_scalar")]
    pub id: String,
    pub target: String,
}

/// Note ids are often written unquoted, which YAML reads as a number.
fn id_from_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(u64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub publish_tags: Vec<PublishTag>,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

impl SiteConfig {
    /// Location of a named site config: `<notes_dir>/sites/<name>.yaml`.
    pub fn path_for(notes_dir: &Path, name: &str) -> PathBuf {
        notes_dir.join("sites").join(format!("{}.yaml", name))
    }

    /// Load the named site config from the notes directory
    pub fn load(notes_dir: &Path, name: &str) -> Result<Self> {
        Self::load_from_file(&Self::path_for(notes_dir, name))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DrozError::ConfigNotFound(path.to_path_buf())
            } else {
                DrozError::Io(e)
            }
        })?;

        Self::from_yaml(&contents).map_err(|e| {
            DrozError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse YAML text. Blank text is an empty config.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        Ok(serde_yml::from_str(contents)?)
    }

    /// Routing table for this config's publish tags.
    pub fn tag_targets(&self, site_root: &Path) -> TagTargets {
        TagTargets::new(
            site_root,
            self.publish_tags
                .iter()
                .map(|tag| (tag.name.as_str(), tag.target.as_str())),
        )
    }
}
