//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "droz")]
#[command(about = "Export tagged notes into a static site", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Notes directory (default: the directory containing this executable)
    #[arg(long, value_name = "DIR")]
    pub notes: Option<PathBuf>,

    /// Website root directory
    #[arg(long, value_name = "DIR")]
    pub to: PathBuf,

    /// Config name; reads <notes>/sites/<NAME>.yaml
    #[arg(long, value_name = "NAME")]
    pub config: String,

    /// Fail notes that have no title line instead of writing empty pages
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Notes directory, falling back to the executable's directory
    pub fn notes_dir(&self) -> PathBuf {
        if let Some(notes) = &self.notes {
            return notes.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
