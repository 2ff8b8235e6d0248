//! Error types for droz

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for droz
#[derive(Debug, Error)]
pub enum DrozError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Could not read notes directory {path}: {source}")]
    NotesDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note has no title line: {0}")]
    MissingTitle(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrozError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DrozError::ConfigNotFound(_) => 2,
            DrozError::NotesDirectory { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DrozError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Site configs live in <notes>/sites/<name>.yaml\n\
                    • Check the --config name and the --notes directory\n\
                    • Create the file with a publish_tags list",
                    path.display()
                )
            }
            DrozError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Expected format:\n\
                    publish_tags:\n  \
                      - name: public\n    \
                        target: posts",
                    msg
                )
            }
            DrozError::NotesDirectory { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Pass the notes location with --notes {}\n\
                    • Check the directory permissions",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DrozError
pub type Result<T> = std::result::Result<T, DrozError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_suggestion() {
        let err = DrozError::ConfigNotFound(PathBuf::from("/notes/sites/blog.yaml"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/notes/sites/blog.yaml"));
        assert!(msg.contains("--config"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_error_shows_expected_format() {
        let err = DrozError::Config("Failed to parse blog.yaml".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Failed to parse blog.yaml"));
        assert!(msg.contains("publish_tags:"));
        assert!(msg.contains("target: posts"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_notes_directory_exit_code() {
        let err = DrozError::NotesDirectory {
            path: PathBuf::from("/missing"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_with_suggestions().contains("--notes /missing"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DrozError::MissingTitle(PathBuf::from("202102012138.md"));
        assert_eq!(
            err.display_with_suggestions(),
            "Note has no title line: 202102012138.md"
        );
    }
}
