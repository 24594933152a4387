use std::path::PathBuf;

use tempfile::TempDir;

/// Helper function to write a script into a fresh temporary directory
pub fn write_script(name: &str, contents: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write script");
    (temp_dir, path)
}
