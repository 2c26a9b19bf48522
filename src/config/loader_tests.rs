use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/docs-lint")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load().unwrap();

    assert_eq!(result.config, Config::default());
    assert_eq!(result.source, None);
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/site")
        .with_file(
            "/my/site/.docs-lint.toml",
            "[rules]\ncanonical_lang = \"ja\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.rules.canonical_lang, "ja");
    assert_eq!(result.source, Some(PathBuf::from("/my/site/.docs-lint.toml")));
}

#[test]
fn project_root_overrides_current_directory() {
    let fs = MockFileSystem::new()
        .with_file("/project/.docs-lint.toml", "[rules]\ncanonical_lang = \"de\"\n")
        .with_file("/site/.docs-lint.toml", "[rules]\ncanonical_lang = \"fr\"\n");

    let result = FileConfigLoader::with_fs(fs)
        .with_project_root("/site")
        .load()
        .unwrap();

    assert_eq!(result.config.rules.canonical_lang, "fr");
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/docs-lint/config.toml",
        "[scanner]\nextensions = [\"md\", \"markdown\"]\n",
    );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.scanner.extensions, vec!["md", "markdown"]);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.docs-lint.toml", "[rules]\nposts_dir = \"_local\"\n")
        .with_file(
            "/home/user/.config/docs-lint/config.toml",
            "[rules]\nposts_dir = \"_user\"\n",
        );

    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.rules.posts_dir, "_local");
}

#[test]
fn works_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.source, None);
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(matches!(err, DocsLintError::FileRead { .. }));
}

#[test]
fn syntax_error_is_toml_error() {
    let fs = MockFileSystem::new().with_file("/project/.docs-lint.toml", "[rules\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, DocsLintError::TomlParse(_)));
}

#[test]
fn semantic_error_is_reported() {
    let fs = MockFileSystem::new().with_file(
        "/project/.docs-lint.toml",
        "[scanner]\nexclude = [\"(\"]\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, DocsLintError::InvalidRegex { .. }));
}

#[test]
fn real_filesystem_reads_local_config_from_project_root() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let local = temp_dir.path().join(LOCAL_CONFIG_NAME);
    std::fs::write(&local, "[rules]\ncanonical_lang = \"ko\"\n").unwrap();

    let result = FileConfigLoader::new()
        .with_project_root(temp_dir.path())
        .load()
        .unwrap();

    assert_eq!(result.config.rules.canonical_lang, "ko");
    assert_eq!(result.source, Some(local));
}

#[test]
fn real_filesystem_skips_directory_named_like_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let local = temp_dir.path().join(LOCAL_CONFIG_NAME);
    std::fs::create_dir(&local).unwrap();

    let result = FileConfigLoader::new()
        .with_project_root(temp_dir.path())
        .load()
        .unwrap();

    assert_ne!(result.source, Some(local));
}
