use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn droz_cmd() -> Command {
    let mut cmd = Command::cargo_bin("droz").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `<notes>/sites/<name>.yaml`
pub fn write_site_config(notes: &Path, name: &str, yaml: &str) {
    fs::create_dir_all(notes.join("sites")).unwrap();
    fs::write(notes.join("sites").join(format!("{}.yaml", name)), yaml).unwrap();
}
