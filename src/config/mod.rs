mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    Config, DEFAULT_CANONICAL_LANG, DEFAULT_EXCLUDE_PATTERNS, DEFAULT_EXTENSIONS,
    DEFAULT_VENDOR_DIRS, DEFAULT_WHITESPACE_EXEMPTIONS, RulesConfig, ScannerConfig,
};
pub use validation::validate_config;
