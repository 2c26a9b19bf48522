//! Integration tests for the `check` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Success
// =============================================================================

#[test]
fn empty_tree_prints_status_and_ok() {
    let fixture = TestFixture::new();

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(0)
        .stdout("Checking markdown files... ok\n");
}

#[test]
fn clean_tree_passes() {
    let fixture = TestFixture::new();
    fixture.create_clean_post(
        "en/news/_posts/2020-01-01-title.md",
        "2020-01-01 12:00:00 +0000",
    );
    fixture.create_file("en/about/index.md", "---\nlang: en\n---\n\nAbout\n");

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(0)
        .stdout("Checking markdown files... ok\n");
}

#[test]
fn quiet_success_prints_nothing() {
    let fixture = TestFixture::new();

    docs_lint!()
        .args(["check", "--no-config", "--quiet"])
        .arg(fixture.path())
        .assert()
        .code(0)
        .stdout("");
}

#[test]
fn checks_current_directory_by_default() {
    let fixture = TestFixture::new();
    fixture.create_file("notes.md", "no newline");

    docs_lint!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("notes.md\n  no newline at end of file\n"));
}

// =============================================================================
// Violations
// =============================================================================

#[test]
fn post_with_date_mismatch_and_no_author() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "en/news/_posts/2020-01-01-title.md",
        "---\nlang: en\ndate: 2020-01-02 00:00:00 +0000\n---\n\nBody\n",
    );

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(
            "Checking markdown files...\n\
             en/news/_posts/2020-01-01-title.md\n  \
             missing author variable\n  \
             date mismatch between filename and YAML front matter (UTC)\n",
        );
}

#[test]
fn page_outside_locale_without_final_newline() {
    let fixture = TestFixture::new();
    fixture.create_file("community/notes.md", "no newline at the end");

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(
            "Checking markdown files...\n\
             community/notes.md\n  \
             no newline at end of file\n",
        );
}

#[test]
fn translated_post_needs_translator() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "ja/news/_posts/2020-01-01-title.md",
        "---\nlang: ja\nauthor: \"a\"\ndate: 2020-01-01 00:00:00 +0000\n---\n\nBody\n",
    );

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  missing translator variable\n"));
}

#[test]
fn non_utc_offset_is_reported() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "en/news/_posts/2020-01-01-title.md",
        "---\nlang: en\nauthor: \"a\"\ndate: 2020-01-01 09:00:00 +0900\n---\n\nBody\n",
    );

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "  wrong time zone offset in YAML front matter (not UTC)\n",
        ))
        .stdout(predicate::str::contains("date mismatch").not());
}

#[test]
fn non_utf8_file_is_checked_not_unreadable() {
    let fixture = TestFixture::new();
    std::fs::write(fixture.path().join("legacy.md"), b"caf\xe9 menu \n").unwrap();

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(
            "Checking markdown files...\n\
             legacy.md\n  \
             trailing whitespace\n",
        )
        .stdout(predicate::str::contains("unreadable").not());
}

#[test]
fn quiet_failure_omits_status_line() {
    let fixture = TestFixture::new();
    fixture.create_file("notes.md", "no newline");

    docs_lint!()
        .args(["check", "--no-config", "-q"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout("notes.md\n  no newline at end of file\n");
}

#[test]
fn files_are_reported_in_path_order() {
    let fixture = TestFixture::new();
    fixture.create_file("b/page.md", "x");
    fixture.create_file("a/page.md", "x");

    let output = docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.find("a/page.md").unwrap() < stdout.find("b/page.md").unwrap());
}

// =============================================================================
// Exclusions
// =============================================================================

#[test]
fn default_exclusions_are_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file("README.md", "x");
    fixture.create_file("404.md", "x");
    fixture.create_file("admin/index.md", "x");
    fixture.create_file("en/examples/code.md", "x");
    fixture.create_file("_includes/nav.md", "x");
    fixture.create_file("vendor/bundle/ruby/gem/doc.md", "x");

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(0);
}

#[test]
fn cli_glob_exclusion() {
    let fixture = TestFixture::new();
    fixture.create_file("drafts/wip.md", "x");

    docs_lint!()
        .args(["check", "--no-config", "-x", "drafts/**"])
        .arg(fixture.path())
        .assert()
        .code(0);
}

#[test]
fn cli_extension_override() {
    let fixture = TestFixture::new();
    fixture.create_file("page.markdown", "x");

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(0);

    docs_lint!()
        .args(["check", "--no-config", "--ext", "md,markdown"])
        .arg(fixture.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("page.markdown"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn local_config_adds_exclusions() {
    let fixture = TestFixture::new();
    fixture.create_file("drafts/wip.md", "x");
    fixture.create_config("[scanner]\nexclude_globs = [\"drafts/**\"]\n");

    docs_lint!()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .code(0);

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path())
        .assert()
        .code(1);
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("ja/news/_posts/2020-01-01-title.md", "---\nlang: ja\nauthor: a\ndate: 2020-01-01 00:00:00 +0000\n---\n");
    fixture.create_file("custom.toml", "[rules]\ncanonical_lang = \"ja\"\n");

    docs_lint!()
        .arg("check")
        .arg(fixture.path())
        .arg("--config")
        .arg(fixture.path().join("custom.toml"))
        .assert()
        .code(0);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_root_is_config_error() {
    let fixture = TestFixture::new();

    docs_lint!()
        .args(["check", "--no-config"])
        .arg(fixture.path().join("missing"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn invalid_config_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nexclude = ['(unclosed']\n");

    docs_lint!()
        .arg("check")
        .arg(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid regular expression"));
}
