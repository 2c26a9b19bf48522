use std::io::Write;
use std::path::{Path, PathBuf};

use crate::checker::{RuleChecker, ViolationMap, check_all};
use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::document::{DocumentLoader, PathConventions};
use crate::output::{ColorMode, ReportFormatter, STATUS_LINE, TextFormatter};
use crate::scanner::{DirectoryScanner, FileScanner, PathFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND, Result};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the check command and returns the exit code.
///
/// # Errors
/// Returns an error for configuration problems or an unreadable root. Problems in
/// individual documents are reported as violations instead.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref(), &args.root, cli.no_config)?;
    if let Some(source) = &loaded.source {
        log::info!("using configuration from {}", source.display());
    }

    // 2. Apply CLI argument overrides
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);

    // 3. Discover, load and check
    let candidates = scan(&args.root, &config)?;

    let mut stdout = std::io::stdout();
    if !cli.quiet {
        write!(stdout, "{STATUS_LINE}")?;
        stdout.flush()?;
    }

    let violations = check_paths(&args.root, &config, &candidates)?;

    // 4. Report
    let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
    write!(stdout, "{}", render_report(&formatter, &violations, cli.quiet))?;
    stdout.flush()?;

    if violations.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS_FOUND)
    }
}

/// Report text for stdout. In quiet mode the success indicator is dropped and the report
/// does not continue a status line.
#[must_use]
pub fn render_report<F: ReportFormatter>(
    formatter: &F,
    violations: &ViolationMap,
    quiet: bool,
) -> String {
    if !quiet {
        return formatter.format(violations);
    }
    if violations.is_empty() {
        return String::new();
    }
    formatter
        .format(violations)
        .trim_start_matches('\n')
        .to_string()
}

fn load_config(config_path: Option<&Path>, root: &Path, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new().with_project_root(root);
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config
        .scanner
        .exclude_globs
        .extend(args.exclude.iter().cloned());
}

fn scan(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let filter = PathFilter::from_config(&config.scanner)?;
    let scanner = DirectoryScanner::new(filter).with_vendor_dirs(&config.scanner.vendor_dirs);
    scanner.scan(root)
}

fn check_paths(
    root: &Path,
    config: &Config,
    candidates: &[PathBuf],
) -> Result<ViolationMap> {
    let conventions =
        PathConventions::new(&config.rules.locale_pattern, config.rules.posts_dir.as_str())?;
    let loader = DocumentLoader::new(root, conventions);
    let sources = loader.load_all(candidates);

    let checker = RuleChecker::from_config(&config.rules);
    Ok(check_all(&checker, &sources))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
