//! Common test utilities for murano integration tests

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory holding packages, bundles and config files
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a zip archive holding `files`
    #[allow(dead_code)]
    pub fn write_zip(&self, path: &str, files: &[(&str, &str)]) -> PathBuf {
        let file_path = self.path.join(path);
        let file = std::fs::File::create(&file_path).expect("Failed to create archive");
        let mut zip = zip::ZipWriter::new(file);
        for (name, content) in files {
            zip.start_file(*name, zip::write::FileOptions::default())
                .expect("Failed to start archive entry");
            zip.write_all(content.as_bytes())
                .expect("Failed to write archive entry");
        }
        zip.finish().expect("Failed to finish archive");
        file_path
    }

    /// Read one entry of a zip archive in the workspace
    #[allow(dead_code)]
    pub fn read_zip_entry(&self, path: &Path, entry: &str) -> String {
        let file = std::fs::File::open(path).expect("Failed to open archive");
        let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut content = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name(entry).expect("Missing archive entry"),
            &mut content,
        )
        .expect("Failed to read archive entry");
        content
    }

    /// A murano command isolated from the caller's environment and config
    pub fn murano_cmd(&self) -> Command {
        let mut cmd = murano_bin();
        cmd.current_dir(&self.path)
            .env_remove("MURANO_URL")
            .env_remove("OS_AUTH_TOKEN")
            .env_remove("MURANO_REPO_URL")
            .env_remove("MURANO_CONFIG")
            .env_remove("OS_USERNAME")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path.join(".config"))
            .env("HOME", &self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn murano_bin() -> Command {
    Command::cargo_bin("murano").unwrap()
}
