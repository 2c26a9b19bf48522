#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the docs-lint binary.
#[macro_export]
macro_rules! docs_lint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("docs-lint"))
    };
}

/// Creates a temporary documentation tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.docs-lint.toml` in the tree root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".docs-lint.toml", content);
    }

    /// Creates a post that passes every rule.
    pub fn create_clean_post(&self, relative_path: &str, date: &str) {
        self.create_file(
            relative_path,
            &format!("---\nlayout: news_post\nlang: en\nauthor: \"admin\"\ndate: {date}\n---\n\nBody\n"),
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
